use std::rc::Rc;
use yew::prelude::*;

use crate::models::grid_mix::GridMix;
use crate::models::sort::{SortKey, SortState, format_thousands, table_rows};

#[derive(Properties, PartialEq)]
pub struct GridMixTableProps {
    pub data: Rc<GridMix>,
}

/// Generation records as a table sortable by date, fuel type or generation.
#[function_component(GridMixTable)]
pub fn grid_mix_table(props: &GridMixTableProps) -> Html {
    let sort = use_state(SortState::default);
    let rows = use_memo((props.data.clone(), *sort), |(data, sort)| {
        table_rows(data.records(), *sort)
    });

    if props.data.is_empty() {
        return Html::default();
    }

    let headers = SortKey::all()
        .iter()
        .map(|&key| {
            let onclick = {
                let sort = sort.clone();
                Callback::from(move |_: MouseEvent| sort.set(sort.toggled(key)))
            };
            let direction = sort.direction_for(key);
            let aria_sort = direction.map_or("none", |d| d.aria());
            let indicator = direction.map(|d| d.indicator()).unwrap_or_default();

            html! {
                <th key={key.field()} aria-sort={aria_sort}>
                    <button class="sort-button" {onclick}>
                        {key.label()}
                        <span class="sort-indicator">{indicator}</span>
                    </button>
                </th>
            }
        })
        .collect::<Html>();

    html! {
        <div class="grid-mix-table">
            <h3>{"Generation by Fuel Type"}</h3>
            <div class="table-container">
                <table>
                    <thead>
                        <tr>{headers}</tr>
                    </thead>
                    <tbody>
                        {
                            rows.iter().map(|row| html! {
                                <tr>
                                    <td>{row.date.clone()}</td>
                                    <td>{row.type_name.clone()}</td>
                                    <td class="numeric">{row.generation.clone()}</td>
                                </tr>
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            </div>
            <p class="row-count">
                {format!("{} rows fetched", format_thousands(props.data.len() as f64))}
            </p>
        </div>
    }
}

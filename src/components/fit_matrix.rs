//! "Why here" fit matrix.
//!
//! Objectives down the side, site assets across the top, a glowing dot
//! where they meet. Hovering a row or cell highlights its row and column.
//! Narrow screens get one block per objective instead of the grid.

use dioxus::prelude::*;
use fieldlab_core::content::{hits_for_row, is_checked, MATRIX_COLUMNS, MATRIX_ROWS};
use fieldlab_core::MatrixHover;
use fieldlab_ui::SectionHeader;

pub const FIT_ID: &str = "fit";

/// Assets matched by an objective, as shown on narrow screens.
pub fn row_summary(row: usize) -> String {
    let hits = hits_for_row(row);
    if hits.is_empty() {
        "\u{2014}".to_string()
    } else {
        hits.join(" \u{2022} ")
    }
}

#[component]
pub fn FitMatrix() -> Element {
    rsx! {
        section { id: FIT_ID, class: "stage padded",
            div { class: "container",
                SectionHeader {
                    overline: "Why here",
                    title: "Our fields align with INGEARS research goals",
                    blurb: "The matrix below shows how our living testbeds and instrumentation map to the project\u{2019}s core technical objectives, making our site a low\u{2011}friction, high\u{2011}signal venue for at\u{2011}scale validation.",
                }
                DesktopMatrix {}
                MobileBlocks {}
            }
        }
    }
}

#[component]
fn DesktopMatrix() -> Element {
    let mut hover = use_signal(MatrixHover::default);
    let columns = MATRIX_COLUMNS.len();
    let grid = format!(
        "grid-template-columns: minmax(220px, 1fr) repeat({}, minmax(160px, 1fr));",
        columns
    );

    rsx! {
        div { class: "matrix", role: "table",
            div { class: "matrix-row header", role: "row", style: "{grid}",
                div { class: "matrix-cell header sticky", role: "columnheader", "INGEARS objective" }
                for column in MATRIX_COLUMNS {
                    div { key: "{column}", class: "matrix-cell header", role: "columnheader", "{column}" }
                }
            }
            for (r, objective) in MATRIX_ROWS.iter().enumerate() {
                div { key: "{objective}", class: "matrix-row", role: "row", style: "{grid}",
                    div {
                        class: "matrix-cell sticky",
                        role: "cell",
                        onmouseenter: move |_| hover.write().enter_row(r),
                        onmouseleave: move |_| hover.write().leave(),
                        "{objective}"
                    }
                    for c in 0..columns {
                        div {
                            key: "{c}",
                            class: cell_class(is_checked(r, c), hover.read().is_highlighted(r, c)),
                            role: "cell",
                            onmouseenter: move |_| hover.write().enter_cell(r, c),
                            onmouseleave: move |_| hover.write().leave(),
                        }
                    }
                }
            }
        }
    }
}

fn cell_class(on: bool, highlight: bool) -> &'static str {
    match (on, highlight) {
        (true, true) => "matrix-cell on highlight",
        (true, false) => "matrix-cell on",
        (false, true) => "matrix-cell highlight",
        (false, false) => "matrix-cell",
    }
}

#[component]
fn MobileBlocks() -> Element {
    rsx! {
        div { class: "matrix-blocks",
            for (r, objective) in MATRIX_ROWS.iter().enumerate() {
                div { key: "{objective}", class: "matrix-block",
                    h4 { "{objective}" }
                    p { {row_summary(r)} }
                }
            }
        }
    }
}

use contracts::shared::date_field::DATE_INPUT_TYPE;
use leptos::prelude::*;

const DEFAULT_STYLE: &str = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 130px;";

/// Native date picker showing `value`
/// Only the displayed value is bound; user edits are not written back.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <input
            type=DATE_INPUT_TYPE
            prop:value=value
            style=DEFAULT_STYLE
        />
    }
}

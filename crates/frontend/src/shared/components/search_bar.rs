use leptos::prelude::*;

/// Search input shared by the list screens; fires on every keystroke.
#[component]
pub fn SearchBar(
    on_search: Callback<String>,
    #[prop(into, default = String::from("Buscar..."))] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-bar__input"
                placeholder=placeholder
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
        </div>
    }
}

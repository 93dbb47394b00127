//! Modal listing the students of one classroom.

#[cfg(test)]
#[path = "student_list_modal_test.rs"]
mod student_list_modal_test;

use leptos::prelude::*;
use records::model::StudentRef;

fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

/// Fullscreen modal with the classroom's student names. Closes on the
/// button, a backdrop click, or Escape.
#[component]
pub fn StudentListModal(classroom_name: String, students: Vec<StudentRef>, on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_close_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };
    let is_empty = students.is_empty();

    // Keyboard focus moves into the modal on open so Escape works at once.
    let modal_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        if let Some(el) = modal_ref.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div class="modal__backdrop" on:click=on_backdrop>
            <div class="modal" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0" node_ref=modal_ref>
                <h2 class="modal__title">{format!("Žáci třídy {classroom_name}")}</h2>
                <Show when=move || is_empty>
                    <p class="modal__empty">"Třída nemá žádné žáky."</p>
                </Show>
                <ul class="modal__list">
                    {students
                        .into_iter()
                        .map(|student| view! { <li class="modal__item">{student.full_name}</li> })
                        .collect_view()}
                </ul>
                <button class="btn modal__close" on:click=on_close_click>
                    "Zavřít"
                </button>
            </div>
        </div>
    }
}

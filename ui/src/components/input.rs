use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "field-input",
            r#type: r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

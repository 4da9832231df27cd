use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default = "".to_string())] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "field-label",
            r#for: "{html_for}",
            {children}
        }
    }
}

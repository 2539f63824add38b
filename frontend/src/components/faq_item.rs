use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    #[prop_or_default]
    pub open: bool,
    pub children: Children,
}

/// One collapsible question/answer row.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let expanded = use_state(|| props.open);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            expanded.set(!*expanded);
        })
    };

    html! {
        <div class={classes!("faq-item", (*expanded).then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*expanded).to_string()}>
                <span>{&props.question}</span>
                <span class="faq-toggle">{if *expanded { "−" } else { "+" }}</span>
            </button>
            if *expanded {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

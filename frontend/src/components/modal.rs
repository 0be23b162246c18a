use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    pub fn class(&self) -> &'static str {
        match self {
            ModalSize::Sm => "modal-sm",
            ModalSize::Md => "modal-md",
            ModalSize::Lg => "modal-lg",
            ModalSize::Xl => "modal-xl",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub size: ModalSize,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Overlay dialog; clicking the backdrop or the close button closes it
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class={classes!("modal", props.size.class())} onclick={on_modal_click} role="dialog">
                <div class="modal-header">
                    <h3 class="modal-title">{props.title.clone()}</h3>
                    <button type="button" class="modal-close" aria-label="Cerrar" onclick={on_close_click}>
                        {"×"}
                    </button>
                </div>
                <div class="modal-body">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}

use michi_core::Piece;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Helper component to attatch the contents into the document.body instead of in the place where it's used.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let modal_host = gloo::utils::body();
    create_portal(props.children.clone(), modal_host.into())
}

pub(crate) const fn piece_glyph(piece: Piece) -> &'static str {
    match piece {
        Piece::Cat => "🐱",
        Piece::Dog => "🐶",
    }
}

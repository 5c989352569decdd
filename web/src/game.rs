use crate::utils::*;
use clap::Args;
use michi_core as game;
use game::{BackgroundIntensity, CellIndex, Intent, Piece, Status};
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn status_classes(status: Status) -> Classes {
    match status {
        Status::Winner(piece) => classes!("status", "winner", piece.key()),
        Status::Draw => classes!("status", "draw"),
        Status::NextPlayer(_) => classes!("status", "next-player"),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct SquareProps {
    index: CellIndex,
    cell: game::Cell,
    #[prop_or_default]
    highlighted: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<CellIndex>,
}

#[function_component(SquareView)]
fn square_component(props: &SquareProps) -> Html {
    let SquareProps {
        index,
        cell,
        highlighted,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "square",
        cell.piece().map(Piece::key),
        highlighted.then_some("winning"),
        locked.then_some("locked"),
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("square {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button {class} {onclick}>
            {
                match cell.piece() {
                    Some(piece) => html! { <span title={piece.name()}>{piece_glyph(piece)}</span> },
                    None => html! {},
                }
            }
        </button>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct BoardProps {
    board: game::Board,
    status: Status,
    #[prop_or_default]
    winning_line: Option<game::Line>,
    callback: Callback<CellIndex>,
}

#[function_component(BoardView)]
fn board_component(props: &BoardProps) -> Html {
    let BoardProps {
        board,
        status,
        winning_line,
        callback,
    } = props.clone();
    let finished = !matches!(status, Status::NextPlayer(_));

    html! {
        <>
            <div class={status_classes(status)}>{status.to_string()}</div>
            {
                for (0..game::BOARD_SIDE).map(|row| html! {
                    <div class="board-row">
                        {
                            for (0..game::BOARD_SIDE).map(|col| {
                                let index = game::cell_index(row, col);
                                let cell = board[index];
                                let highlighted = winning_line.is_some_and(|line| line.contains(&index));
                                let locked = finished || !cell.is_empty();
                                let callback = callback.clone();
                                html! {
                                    <SquareView {index} {cell} {highlighted} {locked} {callback}/>
                                }
                            })
                        }
                    </div>
                })
            }
        </>
    }
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub struct GameProps {
    /// Initial background intensity, clamped to 20..=80
    #[arg(short, long)]
    #[prop_or_default]
    pub intensity: Option<i32>,
}

#[derive(Debug)]
pub struct GameView {
    session: game::Session,
}

impl GameView {
    fn view_history(&self, ctx: &Context<Self>, history: &[game::HistoryEntry]) -> Html {
        html! {
            <ol>
                {
                    for history.iter().map(|entry| {
                        let index = entry.index;
                        let onclick = ctx.link().callback(move |_: MouseEvent| Intent::HistoryJump(index));
                        let class = classes!(entry.is_current.then_some("current"));
                        html! {
                            <li key={index.to_string()}>
                                <button {class} {onclick}>{entry.to_string()}</button>
                            </li>
                        }
                    })
                }
            </ol>
        }
    }

    fn view_slider(&self, ctx: &Context<Self>, intensity: BackgroundIntensity) -> Html {
        let oninput = ctx.link().batch_callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input.value().parse().ok().map(Intent::SliderChange)
        });

        html! {
            <div class="purple-slider">
                <label>
                    {"Background intensity"}
                    <input
                        type="range"
                        min={BackgroundIntensity::MIN.to_string()}
                        max={BackgroundIntensity::MAX.to_string()}
                        value={intensity.get().to_string()}
                        {oninput}
                    />
                </label>
            </div>
        }
    }

    fn view_easter_egg(&self, ctx: &Context<Self>, visible: bool) -> Html {
        if !visible {
            return html! {};
        }

        let onclick = ctx.link().callback(|_: MouseEvent| Intent::DismissOverlay);
        html! {
            <Modal>
                <div class="easter-egg-modal">
                    <div class="easter-egg-content">
                        <h2>{"¡RIGBYFICADO!"}</h2>
                        <p class="easter-egg-art">{"🦝"}</p>
                        <button {onclick}>{"Close"}</button>
                    </div>
                </div>
            </Modal>
        }
    }
}

impl Component for GameView {
    type Message = Intent;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let intensity = ctx
            .props()
            .intensity
            .map(BackgroundIntensity::new)
            .unwrap_or_default();
        Self {
            session: game::Session::new(intensity),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let updated = self.session.dispatch(msg);

        if updated {
            let store = self.session.store();
            let status = Status::new(store.current_outcome(), store.turn_owner());
            log::debug!("{:?} -> {}", msg, status);
        } else {
            log::trace!("{:?} ignored", msg);
        }
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.session.view();
        let style = format!("background-color: {}", view.intensity.css_color());
        let callback = ctx.link().callback(Intent::CellClick);

        html! {
            <div class="game-wrapper" {style}>
                <h1>{"Tic-Tac-Toe"}</h1>
                <div class="game">
                    <div class="game-board">
                        <BoardView
                            board={view.board}
                            status={view.status}
                            winning_line={view.winning_line}
                            {callback}
                        />
                    </div>
                    <div class="game-info">
                        { self.view_history(ctx, &view.history) }
                    </div>
                </div>
                { self.view_slider(ctx, view.intensity) }
                { self.view_easter_egg(ctx, view.easter_egg_visible) }
            </div>
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn settle() {
        yew::platform::time::sleep(Duration::ZERO).await;
    }

    fn text_of(root: &web_sys::Element, selector: &str) -> String {
        root.query_selector(selector)
            .unwrap()
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn clicking_a_square_passes_the_turn() {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        yew::Renderer::<GameView>::with_root(root.clone()).render();
        settle().await;
        assert_eq!(text_of(&root, ".status"), "Next player: Cat");

        let square: web_sys::HtmlElement = root
            .query_selector(".square")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        square.click();
        settle().await;

        assert_eq!(text_of(&root, ".status"), "Next player: Dog");
        assert_eq!(root.query_selector_all("ol li").unwrap().length(), 2);
    }
}

use hanzi_app::handler::update;
use hanzi_app::{AppState, Message};
use hanzi_backend::test_utils::{cat_fields, PLUS_STROKES_JSON};
use hanzi_core::{CharacterData, CharacterStrokes};

use super::*;
use crate::test_utils::TestTerminal;

fn render(state: &AppState) -> (TestTerminal, ScreenAreas) {
    let mut term = TestTerminal::new();
    let mut cache = BoardCache::default();
    let mut areas = None;
    term.draw_with(|frame| areas = Some(view(frame, state, &mut cache)));
    (term, areas.expect("view ran"))
}

/// Apply a message and its follow-ups, ignoring actions
fn apply(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

#[test]
fn test_initial_screen() {
    let state = AppState::new();
    let (term, _) = render(&state);

    assert!(term.buffer_contains("汉字笔画学习器"));
    assert!(term.buffer_contains("准备就绪! 选择模式开始。"));
    assert!(term.buffer_contains("生成笔画"));
    assert!(term.buffer_contains("演示笔画"));
    assert!(term.buffer_contains("开始描红"));
    assert!(term.buffer_contains("预览模式"));
    assert!(term.buffer_contains("请输入汉字开始学习"));
    assert!(term.buffer_contains("猫"));
}

#[test]
fn test_loading_screen() {
    let mut state = AppState::new();
    apply(&mut state, Message::Generate);
    let (term, _) = render(&state);

    assert!(term.buffer_contains("正在分析汉字..."));
    assert!(term.buffer_contains("加载中"));
    assert!(!term.buffer_contains("请输入汉字开始学习"));
}

#[test]
fn test_loaded_screen_shows_details_and_strokes() {
    let mut state = AppState::new();
    state.input = "十".to_string();
    apply(&mut state, Message::Generate);
    let token = state.request_token;
    apply(
        &mut state,
        Message::MetadataLoaded {
            token,
            data: CharacterData::from_fields("十", cat_fields()),
        },
    );
    apply(
        &mut state,
        Message::StrokesLoaded {
            character: '十',
            strokes: CharacterStrokes::from_json('十', PLUS_STROKES_JSON).unwrap(),
        },
    );
    let (term, areas) = render(&state);

    assert!(term.buffer_contains("已加载: 十。准备练习。"));
    assert!(term.buffer_contains("汉字详情"));
    assert!(term.buffer_contains("māo"));

    let inner = areas.board_inner();
    let stroke_cells = (inner.y..inner.bottom())
        .flat_map(|y| (inner.x..inner.right()).map(move |x| (x, y)))
        .filter(|&pos| term.buffer()[pos].fg == palette::BOARD_STROKE)
        .count();
    assert!(stroke_cells > 0);
}

#[test]
fn test_quiz_screen() {
    let mut state = AppState::new();
    apply(&mut state, Message::Generate);
    apply(&mut state, Message::StartQuiz);
    let (term, _) = render(&state);

    assert!(term.buffer_contains("描红模式：请在田字格中书写。"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let state = AppState::new();
    let mut term = TestTerminal::with_size(30, 10);
    let mut cache = BoardCache::default();
    term.draw_with(|frame| {
        view(frame, &state, &mut cache);
    });
}

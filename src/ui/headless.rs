//! Headless-Frames für UI-Tests: egui ohne Fenster ausführen und
//! gezeichnete Texte samt Position auslesen.

use crate::app::{AppIntent, AppState};

/// Signatur der Panel-Render-Funktionen.
pub(crate) type Render = fn(&egui::Context, &AppState) -> Vec<AppIntent>;

fn screen_input(events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(1024.0, 768.0),
        )),
        events,
        ..Default::default()
    }
}

/// Führt einen Frame aus; liefert die Intents und alle sichtbaren Texte.
pub(crate) fn run_frame(
    ctx: &egui::Context,
    state: &AppState,
    render: Render,
    events: Vec<egui::Event>,
) -> (Vec<AppIntent>, Vec<(String, egui::Rect)>) {
    let mut intents = Vec::new();
    let output = ctx.run(screen_input(events), |ctx| {
        intents.extend(render(ctx, state));
    });

    let mut texts = Vec::new();
    for clipped in &output.shapes {
        collect_texts(&clipped.shape, &mut texts);
    }
    (intents, texts)
}

/// Sichtbare Texte nach abgeschlossenen Layout-Frames (Grid braucht einen Sizing-Pass).
pub(crate) fn settled_texts(ctx: &egui::Context, state: &AppState, render: Render) -> Vec<String> {
    let mut texts = Vec::new();
    for _ in 0..3 {
        texts = run_frame(ctx, state, render, Vec::new()).1;
    }
    texts.into_iter().map(|(text, _)| text).collect()
}

/// Klickt auf den Text `label` (Drücken und Loslassen in zwei Frames).
///
/// Liefert die Intents des Loslassen-Frames.
pub(crate) fn click_text(
    ctx: &egui::Context,
    state: &AppState,
    render: Render,
    label: &str,
) -> Vec<AppIntent> {
    let mut texts = Vec::new();
    for _ in 0..3 {
        texts = run_frame(ctx, state, render, Vec::new()).1;
    }
    let pos = texts
        .iter()
        .find(|(text, _)| text == label)
        .map(|(_, rect)| rect.center())
        .unwrap_or_else(|| panic!("Text '{label}' nicht gezeichnet: {texts:?}"));

    let button = |pressed| egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    };

    let (pressed_intents, _) = run_frame(
        ctx,
        state,
        render,
        vec![egui::Event::PointerMoved(pos), button(true)],
    );
    assert!(pressed_intents.is_empty(), "{pressed_intents:?}");

    run_frame(ctx, state, render, vec![button(false)]).0
}

fn collect_texts(shape: &egui::Shape, out: &mut Vec<(String, egui::Rect)>) {
    match shape {
        egui::Shape::Text(text) => {
            out.push((text.galley.text().to_string(), text.visual_bounding_rect()))
        }
        egui::Shape::Vec(shapes) => {
            for shape in shapes {
                collect_texts(shape, out);
            }
        }
        _ => {}
    }
}

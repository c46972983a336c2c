use bevy::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use constants::paths::{PROGRESS_AMOUNT_ID, PROGRESS_BAR_ID};

use super::animator::ProgressFrame;

#[derive(Debug, Error)]
enum DomError {
    #[error("document is not available")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{0} is not an HTML element")]
    NotHtml(&'static str),
    #[error("could not set style on #{id}: {reason}")]
    Style { id: &'static str, reason: String },
}

/// Mirrors animator frames into the page's progress bar elements.
pub fn apply_progress_to_dom(mut frames: EventReader<ProgressFrame>, mut warned: Local<bool>) {
    let mut latest = None;
    for frame in frames.read() {
        if frame.starts_counting {
            report_once(write_bar_width(frame), &mut *warned);
        }
        latest = Some(frame);
    }

    if let Some(frame) = latest {
        report_once(write_amount(frame), &mut *warned);
    }
}

// Missing markup is a page fault, report it once and carry on animating.
fn report_once(result: Result<(), DomError>, warned: &mut bool) {
    if let Err(error) = result {
        if !*warned {
            warn!("Progress bar not updated: {error}");
            *warned = true;
        }
    }
}

fn document() -> Result<web_sys::Document, DomError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DomError::NoDocument)
}

/// Set once; the page's CSS transition tweens the width towards this target.
fn write_bar_width(frame: &ProgressFrame) -> Result<(), DomError> {
    let bar = document()?
        .get_element_by_id(PROGRESS_BAR_ID)
        .ok_or(DomError::MissingElement(PROGRESS_BAR_ID))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::NotHtml(PROGRESS_BAR_ID))?;

    bar.style()
        .set_property("width", &frame.width_css())
        .map_err(|error| DomError::Style {
            id: PROGRESS_BAR_ID,
            reason: format!("{error:?}"),
        })
}

fn write_amount(frame: &ProgressFrame) -> Result<(), DomError> {
    let amount = document()?
        .get_element_by_id(PROGRESS_AMOUNT_ID)
        .ok_or(DomError::MissingElement(PROGRESS_AMOUNT_ID))?;
    amount.set_text_content(Some(&frame.amount_text()));
    Ok(())
}

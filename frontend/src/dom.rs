use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, HtmlElement, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document element")]
    NoDocument,
    #[error("javascript error: {0}")]
    JsError(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::JsError(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn scroll_y(window: &Window) -> Result<f64, DomError> {
    Ok(window.scroll_y()?)
}

pub fn viewport_height(window: &Window) -> Result<f64, DomError> {
    window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| DomError::JsError("innerHeight is not a number".into()))
}

/// Width taken by the vertical scrollbar, so full-bleed cards do not overflow.
pub fn scrollbar_width(window: &Window) -> Result<f64, DomError> {
    let inner = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| DomError::JsError("innerWidth is not a number".into()))?;
    let client = window
        .document()
        .and_then(|d| d.document_element())
        .ok_or(DomError::NoDocument)?
        .client_width();
    Ok((inner - client as f64).max(0.0))
}

pub fn set_styles(element: &HtmlElement, properties: &[(&str, &str)]) -> Result<(), DomError> {
    let style = element.style();
    for (name, value) in properties {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Where a `WindowListener` adds and removes its callback.
pub trait EventHost {
    fn add(&self, event: &str, passive: bool) -> Result<(), DomError>;
    fn remove(&self, event: &str) -> Result<(), DomError>;
}

pub struct BrowserEvents {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl EventHost for BrowserEvents {
    fn add(&self, event: &str, passive: bool) -> Result<(), DomError> {
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                self.callback.as_ref().unchecked_ref(),
                &options,
            )?;
        Ok(())
    }

    fn remove(&self, event: &str) -> Result<(), DomError> {
        self.window
            .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())?;
        Ok(())
    }
}

/// Window event registration that lives exactly as long as this value.
/// Dropping it removes the callback from every event it was added to.
pub struct WindowListener<H: EventHost = BrowserEvents> {
    host: H,
    events: &'static [&'static str],
    registered: usize,
}

impl WindowListener {
    pub fn new<F>(events: &'static [&'static str], passive: bool, callback: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let host = BrowserEvents {
            window: window()?,
            callback: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
        };
        Self::with_host(host, events, passive)
    }
}

impl<H: EventHost> WindowListener<H> {
    pub fn with_host(host: H, events: &'static [&'static str], passive: bool) -> Result<Self, DomError> {
        let mut listener = Self {
            host,
            events,
            registered: 0,
        };
        for event in events {
            // On error the events added so far are removed when `listener` drops.
            listener.host.add(event, passive)?;
            listener.registered += 1;
        }
        Ok(listener)
    }
}

impl<H: EventHost> Drop for WindowListener<H> {
    fn drop(&mut self) {
        for event in &self.events[..self.registered] {
            if let Err(err) = self.host.remove(event) {
                warn!("failed to remove {} listener: {}", event, err);
            }
        }
    }
}

/// Where a `FrameScheduler` requests and cancels animation frames.
pub trait FrameHost {
    fn request_frame(&self) -> Result<i32, DomError>;
    fn cancel_frame(&self, id: i32);
}

pub struct BrowserFrames {
    window: Window,
    frame: Closure<dyn FnMut()>,
}

impl FrameHost for BrowserFrames {
    fn request_frame(&self) -> Result<i32, DomError> {
        Ok(self
            .window
            .request_animation_frame(self.frame.as_ref().unchecked_ref())?)
    }

    fn cancel_frame(&self, id: i32) {
        let _ = self.window.cancel_animation_frame(id);
    }
}

/// Frame callback that releases the pending slot before running `on_frame`.
fn clear_then<F>(pending: Rc<Cell<Option<i32>>>, mut on_frame: F) -> impl FnMut()
where
    F: FnMut(),
{
    move || {
        pending.set(None);
        on_frame();
    }
}

/// Coalesces repeated `schedule` calls into a single animation frame.
pub struct FrameScheduler<H: FrameHost = BrowserFrames> {
    host: H,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameScheduler {
    pub fn new<F>(on_frame: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let pending = Rc::new(Cell::new(None));
        let host = BrowserFrames {
            window: window()?,
            frame: Closure::wrap(Box::new(clear_then(pending.clone(), on_frame)) as Box<dyn FnMut()>),
        };
        Ok(Self::with_host(host, pending))
    }
}

impl<H: FrameHost> FrameScheduler<H> {
    /// `pending` must be the slot cleared by the host's frame callback.
    pub fn with_host(host: H, pending: Rc<Cell<Option<i32>>>) -> Self {
        Self { host, pending }
    }

    pub fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        match self.host.request_frame() {
            Ok(id) => self.pending.set(Some(id)),
            Err(err) => warn!("requestAnimationFrame failed: {}", err),
        }
    }
}

impl<H: FrameHost> Drop for FrameScheduler<H> {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.host.cancel_frame(id);
        }
    }
}

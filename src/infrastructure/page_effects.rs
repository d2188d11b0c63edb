use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use crate::domain::{
    errors::{PricingError, PricingResult},
    logging::{LogComponent, get_logger},
    page::{HeaderStyle, anchor_target, back_to_top_visible, should_close_menu},
};
use crate::event_utils::{EventListenerHandle, EventOptions, window_event_listener_with_options};
use crate::infrastructure::config::PageEffectsConfig;
use crate::infrastructure::dom::{element_by_id, query_all, query_html_element, query_one};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Adds `fade-in` to cards the first time they scroll into view.
/// Disconnects when dropped.
pub struct FadeInObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl FadeInObserver {
    pub fn observe(document: &Document, config: &PageEffectsConfig) -> PricingResult<Self> {
        let callback: ObserverCallback = Closure::wrap(Box::new(|entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("fade-in");
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.observer_threshold));
        init.set_root_margin(&config.observer_root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| PricingError::browser("IntersectionObserver", e))?;

        let targets = query_all(document, &config.animated_selector)?;
        for target in &targets {
            observer.observe(target);
        }

        get_logger().debug(
            LogComponent::Infrastructure("PageEffects"),
            &format!("Observing {} animated elements", targets.len()),
        );

        Ok(Self { observer, _callback: callback })
    }

    pub fn disconnect(self) {
        drop(self);
    }
}

impl Drop for FadeInObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn smooth_scroll_to(document: &Document, selector: &str) {
    let Ok(Some(target)) = document.query_selector(selector) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    options.set_inline(ScrollLogicalPosition::Nearest);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// In-page `#anchor` links scroll smoothly instead of jumping.
pub fn bind_smooth_scroll(document: &Document) -> PricingResult<Vec<EventListener>> {
    let anchors = query_all(document, "a[href^=\"#\"]")?;
    Ok(anchors
        .into_iter()
        .map(|anchor| {
            let doc = document.clone();
            let this = anchor.clone();
            EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let href = this.get_attribute("href");
                    let Some(selector) = anchor_target(href.as_deref()) else {
                        return;
                    };
                    event.prevent_default();
                    smooth_scroll_to(&doc, selector);
                },
            )
        })
        .collect())
}

fn current_scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn apply_header_style(header: &HtmlElement, style: HeaderStyle) {
    let css = header.style();
    let _ = css.set_property("background", style.background);
    let _ = css.set_property("box-shadow", style.box_shadow);
}

pub fn bind_header_style(header: HtmlElement, threshold: f64) -> Option<EventListenerHandle> {
    window_event_listener_with_options(leptos::ev::scroll, &EventOptions::default(), move |_| {
        apply_header_style(&header, HeaderStyle::for_scroll(current_scroll_y(), threshold));
    })
}

fn contains(container: &Element, target: Option<&Node>) -> bool {
    container.contains(target)
}

/// Mobile navigation: toggle button, click-outside and link clicks close it.
pub fn bind_mobile_menu(document: &Document, button: Element, nav: Element, links_selector: &str) -> PricingResult<Vec<EventListener>> {
    let mut listeners = Vec::new();

    let (btn, menu) = (button.clone(), nav.clone());
    listeners.push(EventListener::new(&button, "click", move |_| {
        let _ = btn.class_list().toggle("active");
        let _ = menu.class_list().toggle("active");
    }));

    let (btn, menu) = (button.clone(), nav.clone());
    listeners.push(EventListener::new(document, "click", move |event| {
        let target = event.target();
        let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        if should_close_menu(contains(&btn, node), contains(&menu, node)) {
            let _ = btn.class_list().remove_1("active");
            let _ = menu.class_list().remove_1("active");
        }
    }));

    for link in query_all(document, links_selector)? {
        let (btn, menu) = (button.clone(), nav.clone());
        listeners.push(EventListener::new(&link, "click", move |_| {
            let _ = btn.class_list().remove_1("active");
            let _ = menu.class_list().remove_1("active");
        }));
    }

    Ok(listeners)
}

pub fn bind_back_to_top(button: Element, threshold: f64) -> (Option<EventListenerHandle>, EventListener) {
    let shown = button.clone();
    let scroll = window_event_listener_with_options(leptos::ev::scroll, &EventOptions::default(), move |_| {
        let classes = shown.class_list();
        let _ = if back_to_top_visible(current_scroll_y(), threshold) {
            classes.add_1("visible")
        } else {
            classes.remove_1("visible")
        };
    });

    let click = EventListener::new(&button, "click", |_| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    (scroll, click)
}

/// Footer copyright year, if the page has the slot.
pub fn fill_copyright_year(document: &Document, id: &str) {
    if let Ok(slot) = element_by_id(document, id) {
        let year = js_sys::Date::new_0().get_full_year();
        slot.set_text_content(Some(&year.to_string()));
    }
}

/// Everything registered for the page chrome. Optional regions that are
/// missing from the markup are skipped. Every part unregisters on drop, so an
/// `install` that fails halfway leaves nothing attached.
pub struct PageEffects {
    fade_in: Option<FadeInObserver>,
    scroll_handles: Vec<EventListenerHandle>,
    listeners: Vec<EventListener>,
}

impl PageEffects {
    pub fn install(document: &Document, config: &PageEffectsConfig) -> PricingResult<Self> {
        let component = LogComponent::Infrastructure("PageEffects");

        let fade_in = match FadeInObserver::observe(document, config) {
            Ok(observer) => Some(observer),
            Err(err) => {
                get_logger().warn(component.clone(), &format!("Fade-in disabled: {}", err));
                None
            }
        };

        let mut listeners = bind_smooth_scroll(document)?;
        let mut scroll_handles = Vec::new();

        if let Some(header) = query_html_element(document, &config.header_selector)? {
            scroll_handles.extend(bind_header_style(header, config.header_scroll_threshold));
        }

        let button = query_one(document, &config.mobile_menu_button_selector)?;
        let nav = query_one(document, &config.nav_links_selector)?;
        if let (Some(button), Some(nav)) = (button, nav) {
            let links = format!("{} a", config.nav_links_selector);
            listeners.extend(bind_mobile_menu(document, button, nav, &links)?);
        }

        if let Some(back_to_top) = query_one(document, &config.back_to_top_selector)? {
            let (scroll, click) = bind_back_to_top(back_to_top, config.back_to_top_threshold);
            scroll_handles.extend(scroll);
            listeners.push(click);
        }

        fill_copyright_year(document, &config.copyright_year_id);

        get_logger().info(
            component,
            &format!(
                "Page effects installed: {} listeners, {} scroll handlers",
                listeners.len(),
                scroll_handles.len()
            ),
        );

        Ok(Self { fade_in, scroll_handles, listeners })
    }

    pub fn is_observing(&self) -> bool {
        self.fade_in.is_some()
    }

    pub fn scroll_handler_count(&self) -> usize {
        self.scroll_handles.len()
    }

    /// Unregisters every listener and disconnects the observer.
    pub fn teardown(self) {
        get_logger().debug(
            LogComponent::Infrastructure("PageEffects"),
            &format!(
                "Tearing down {} listeners, {} scroll handlers",
                self.listeners.len(),
                self.scroll_handles.len()
            ),
        );
        drop(self);
    }
}

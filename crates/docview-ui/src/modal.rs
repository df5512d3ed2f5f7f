//! Preview card and modal document viewer.

use docview_core::{
    DownloadRequest, Layout, PageCounter, PageLayout, PreviewInput, ScrollLockSlot, Transition,
    ViewerConfig, ViewerEvent, ViewerState, ZoomLevel,
};
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::{
    browser::{self, BodyScrollHost},
    icons::{Icon, IconKind},
    presence::Presence,
    renderer::{DocumentRenderer, RenderRequest},
};

/// Clickable preview card that expands into a full-screen document viewer.
///
/// The viewer has page navigation, zoom, download and close controls. On
/// compact viewports it slides up as a sheet that can be dragged down by
/// its top handle to dismiss. Page scrolling is locked while it is open.
#[component]
pub fn DocumentPreviewModal<R>(
    /// Card and document inputs.
    input: PreviewInput,
    /// Renders the document inside the modal.
    renderer: R,
    /// Viewer tunables.
    #[prop(optional)]
    config: ViewerConfig,
) -> impl IntoView
where
    R: DocumentRenderer,
{
    let config = StoredValue::new(config);
    let input = StoredValue::new(input);
    let renderer = StoredValue::new(renderer);
    let state = RwSignal::new(ViewerState::new());

    let dispatch = move |event: ViewerEvent| {
        config.with_value(|config| {
            state.maybe_update(|state| state.apply(event, config) != Transition::Ignored);
        });
    };

    let measure = move || match browser::window_width() {
        Ok(width) => dispatch(ViewerEvent::Measured { width }),
        Err(e) => log::warn!("{e}"),
    };
    measure();
    let resize = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize.remove());

    let is_open = Memo::new(move |_| state.with(ViewerState::is_open));
    let layout = Memo::new(move |_| state.with(ViewerState::layout));
    let zoom = Memo::new(move |_| state.with(ViewerState::zoom));
    let dragging = Memo::new(move |_| state.with(ViewerState::is_dragging));
    let drag_offset =
        Memo::new(move |_| config.with_value(|config| state.with(|s| s.drag_offset(config))));

    // Dropping the slot with the component's owner releases a held lock.
    let scroll_lock = StoredValue::new_local(ScrollLockSlot::<BodyScrollHost>::new());
    Effect::new(move |_| {
        let locked = is_open.get();
        scroll_lock.update_value(|slot| {
            if let Err(e) = slot.sync(locked, BodyScrollHost::current) {
                log::warn!("{e}");
            }
        });
    });

    // Keeps the modal mounted for the slide-out after closing.
    let presence = RwSignal::new(Presence::Hidden);
    let leave_token = StoredValue::new(0_u64);
    Effect::new(move |_| {
        let open = is_open.get();
        let presentation =
            config.with_value(|config| state.with_untracked(|s| s.presentation(config)));
        let next = presence.get_untracked().follow(open, presentation);
        presence.set(next);

        if next.is_leaving() {
            leave_token.update_value(|token| *token += 1);
            let token = leave_token.get_value();
            set_timeout(
                move || {
                    if leave_token.try_get_value() == Some(token) {
                        presence.try_update(|p| *p = p.finish_leaving());
                    }
                },
                presentation.exit_delay(),
            );
        }
    });

    let current_page = renderer.with_value(R::current_page);
    let page_count = renderer.with_value(R::page_count);
    let counter = Signal::derive(move || PageCounter::new(current_page.get(), page_count.get()));

    let on_activate = Callback::new(move |_: ()| dispatch(ViewerEvent::CardActivated));
    let on_close = Callback::new(move |_: ()| dispatch(ViewerEvent::CloseRequested));
    let on_zoom_in = Callback::new(move |_: ()| dispatch(ViewerEvent::ZoomIn));
    let on_zoom_out = Callback::new(move |_: ()| dispatch(ViewerEvent::ZoomOut));
    let on_drag = Callback::new(dispatch);
    let on_previous_page = Callback::new(move |_: ()| renderer.with_value(|r| r.jump_to_previous_page()));
    let on_next_page = Callback::new(move |_: ()| renderer.with_value(|r| r.jump_to_next_page()));
    let on_download = Callback::new(move |_: ()| {
        let request = input.with_value(|input| DownloadRequest::for_document(&input.document_url));
        if let Err(e) = browser::trigger_download(&request) {
            log::warn!("{e}");
        }
    });

    let page_layout = config.with_value(|config| PageLayout::from(config.page.clone()));
    let document = move || {
        zoom.get().map(|zoom| {
            let request = RenderRequest {
                url: input.with_value(|input| input.document_url.clone()),
                scale: zoom.scale(),
                layout: page_layout,
            };
            renderer.with_value(|r| r.render(request))
        })
    };

    let slide_ms = config.with_value(|config| config.layout.slide_duration_ms);
    let modal_class = move || modal_classes(layout.get(), presence.get(), dragging.get());
    let modal_style = move || {
        format!(
            "--docview-slide-duration: {slide_ms}ms; transform: translateY({}px);",
            drag_offset.get()
        )
    };

    view! {
      <div class="docview">
        <PreviewCard input=input.get_value() on_activate=on_activate />

        <Show when=move || presence.get().is_mounted()>
          <div class="docview-overlay"></div>
          <div
            class=modal_class
            style=modal_style
            role="dialog"
            aria-modal="true"
            aria-label=move || input.with_value(|input| input.title.clone())
          >
            <Show when=move || layout.get().is_compact()>
              <DragHandle on_event=on_drag />
            </Show>

            <div class="docview-document">{document}</div>

            <ControlBar
              counter=counter
              zoom=zoom
              on_previous_page=on_previous_page
              on_next_page=on_next_page
              on_zoom_out=on_zoom_out
              on_zoom_in=on_zoom_in
              on_download=on_download
              on_close=on_close
            />
          </div>
        </Show>
      </div>
    }
}

fn modal_classes(layout: Layout, presence: Presence, dragging: bool) -> String {
    let mut class = String::from("docview-modal");
    if layout.is_compact() {
        class.push_str(" docview-modal--compact");
    }
    if presence.is_leaving() {
        class.push_str(" docview-modal--leaving");
    }
    if dragging {
        class.push_str(" docview-modal--dragging");
    }
    class
}

/// Zoom controls stay disabled until the first measurement seeds a level.
fn zoom_in_disabled(zoom: Option<ZoomLevel>) -> bool {
    !zoom.is_some_and(ZoomLevel::can_zoom_in)
}

fn zoom_out_disabled(zoom: Option<ZoomLevel>) -> bool {
    !zoom.is_some_and(ZoomLevel::can_zoom_out)
}

/// The collapsed card: preview image, title and reading time.
#[component]
pub fn PreviewCard(
    /// Card inputs.
    input: PreviewInput,
    /// Called when the card is activated.
    on_activate: Callback<()>,
) -> impl IntoView {
    let caption = input.reading_time_label();
    let label = format!("Open {}", input.title);
    let PreviewInput {
        preview_image_url,
        title,
        ..
    } = input;

    view! {
      <div class="docview-card">
        <button
          type="button"
          class="docview-card-preview"
          aria-label=label
          on:click=move |_| on_activate.run(())
        >
          <img src=preview_image_url alt="Document preview" class="docview-card-image" />
        </button>
        <div class="docview-card-meta">
          <p class="docview-card-title">{title}</p>
          <p class="docview-card-reading-time">{caption}</p>
        </div>
      </div>
    }
}

/// Top handle of the compact sheet. The only place a drag can start.
#[component]
fn DragHandle(on_event: Callback<ViewerEvent>) -> impl IntoView {
    fn pointer_y(ev: &web_sys::PointerEvent) -> f64 {
        f64::from(ev.client_y())
    }

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        let handle = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
        if let Some(handle) = handle {
            if let Err(e) = handle.set_pointer_capture(ev.pointer_id()) {
                log::debug!("pointer capture refused: {e:?}");
            }
        }
        on_event.run(ViewerEvent::DragStarted {
            pointer_y: pointer_y(&ev),
        });
    };

    view! {
      <div
        class="docview-drag-handle"
        on:pointerdown=on_pointer_down
        on:pointermove=move |ev: web_sys::PointerEvent| {
          on_event.run(ViewerEvent::DragMoved { pointer_y: pointer_y(&ev) })
        }
        on:pointerup=move |ev: web_sys::PointerEvent| {
          on_event.run(ViewerEvent::DragReleased { pointer_y: pointer_y(&ev) })
        }
        on:pointercancel=move |ev: web_sys::PointerEvent| {
          on_event.run(ViewerEvent::DragReleased { pointer_y: pointer_y(&ev) })
        }
      >
        <div class="docview-drag-grip"></div>
      </div>
    }
}

/// Floating bar with paging, zoom, download and close controls.
#[component]
fn ControlBar(
    #[prop(into)] counter: Signal<PageCounter>,
    #[prop(into)] zoom: Signal<Option<ZoomLevel>>,
    on_previous_page: Callback<()>,
    on_next_page: Callback<()>,
    on_zoom_out: Callback<()>,
    on_zoom_in: Callback<()>,
    on_download: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
      <div class="docview-controls">
        <div class="docview-controls-group">
          <button
            class="docview-control"
            aria-label="Previous Page"
            on:click=move |_| on_previous_page.run(())
          >
            <Icon kind=IconKind::ChevronLeft />
          </button>
          <span class="docview-controls-label">{move || counter.get().to_string()}</span>
          <button class="docview-control" aria-label="Next Page" on:click=move |_| on_next_page.run(())>
            <Icon kind=IconKind::ChevronRight />
          </button>
        </div>

        <div class="docview-controls-group">
          <button
            class="docview-control"
            aria-label="Zoom Out"
            disabled=move || zoom_out_disabled(zoom.get())
            on:click=move |_| on_zoom_out.run(())
          >
            <Icon kind=IconKind::ZoomOut />
          </button>
          <span class="docview-controls-label">
            {move || zoom.get().map(|zoom| zoom.to_string()).unwrap_or_default()}
          </span>
          <button
            class="docview-control"
            aria-label="Zoom In"
            disabled=move || zoom_in_disabled(zoom.get())
            on:click=move |_| on_zoom_in.run(())
          >
            <Icon kind=IconKind::ZoomIn />
          </button>
        </div>

        <div class="docview-controls-group">
          <button class="docview-control" aria-label="Download PDF" on:click=move |_| on_download.run(())>
            <Icon kind=IconKind::Download />
          </button>
          <button class="docview-control" aria-label="Close Viewer" on:click=move |_| on_close.run(())>
            <Icon kind=IconKind::Close />
          </button>
        </div>
      </div>
    }
}

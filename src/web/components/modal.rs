//! Property detail modal with its image carousel

use leptos::*;

use crate::catalog::{DetailView, ModalRegion, ModalState};
use crate::web::state::GalleryState;

/// Always mounted; hidden while no property is open. The backdrop and the
/// close button dismiss it, clicks on the dialog never do.
#[component]
pub fn PropertyModal() -> impl IntoView {
  let state = use_context::<GalleryState>().expect("GalleryState not found");

  // Changes only when a different property opens, not on carousel moves
  let open_id = create_memo(move |_| {
    state
      .modal
      .with(|m| m.as_ref().map(ModalState::property_id))
  });
  let is_open = move || open_id.get().is_some();

  view! {
    <div
      id="prop-modal"
      class="modal"
      role="dialog"
      aria-modal="true"
      aria-labelledby="prop-modal-title"
      hidden=move || !is_open()
      aria-hidden=move || if is_open() { "false" } else { "true" }
    >
      <div class="modal-backdrop" on:click=move |_| state.click(ModalRegion::Backdrop)></div>
      <div class="modal-dialog" on:click=move |_| state.click(ModalRegion::Content)>
        <button
          class="modal-close"
          data-close=""
          aria-label="Cerrar"
          on:click=move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            state.click(ModalRegion::CloseControl);
          }
        >
          "×"
        </button>
        <div id="prop-modal-body">
          {move || {
            open_id.get()?;
            state
              .modal
              .with_untracked(|m| m.as_ref().map(ModalState::detail))
              .map(|detail| view! { <PropertyDetail detail=detail/> })
          }}
        </div>
      </div>
    </div>
  }
}

#[component]
fn PropertyDetail(detail: DetailView) -> impl IntoView {
  let state = use_context::<GalleryState>().expect("GalleryState not found");

  let slides = detail
    .images
    .iter()
    .enumerate()
    .map(|(i, src)| {
      view! {
        <img
          class="detail-media"
          data-slide=i
          src=src.clone()
          alt=detail.slide_alt(i)
          loading="lazy"
          style:display=move || if state.is_active(i) { "block" } else { "none" }
        />
      }
    })
    .collect_view();

  let dots = (0..detail.images.len())
    .map(|i| {
      view! {
        <button
          class="dot"
          class:active=move || state.is_active(i)
          data-dot=i
          aria-label=format!("Ir a imagen {}", i + 1)
          on:click=move |_| state.go_to(i)
        ></button>
      }
    })
    .collect_view();

  let specs = detail
    .specs
    .into_iter()
    .map(|spec| {
      view! {
        <li><strong>{format!("{}:", spec.label)}</strong>" "{spec.value}</li>
      }
    })
    .collect_view();

  view! {
    <div class="prop-detail">
      <div class="carousel">
        <button
          class="carousel-arrow left"
          aria-label="Anterior"
          data-prev=""
          on:click=move |_| state.prev()
        >
          "❮"
        </button>
        <div class="carousel-viewport">{slides}</div>
        <button
          class="carousel-arrow right"
          aria-label="Siguiente"
          data-next=""
          on:click=move |_| state.next()
        >
          "❯"
        </button>
        <div class="carousel-dots">{dots}</div>
      </div>
      <div class="detail-body">
        <h2 id="prop-modal-title">{detail.title}</h2>
        <p class="detail-meta">{detail.address}</p>
        <p class="detail-price">{detail.price}</p>
        <ul class="detail-specs">{specs}</ul>
        <p class="detail-desc">{detail.description}</p>
      </div>
    </div>
  }
}

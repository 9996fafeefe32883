//! Property grid: loads the listing once and renders one card per record

use leptos::*;

use super::PropertyModal;
use crate::catalog::{activates_card, CardView, GridState};
use crate::web::state::GalleryState;
use crate::web::{apiclient, dom};

#[component]
pub fn PropertyGallery(source: String) -> impl IntoView {
  let state = GalleryState::new();
  provide_context(state);

  // Single attempt; a failure is final for this page view
  spawn_local(async move {
    let result = apiclient::fetch_catalog(&source).await;
    if let Err(e) = &result {
      logging::error!("Failed to load {}: {}", source, e);
    }
    state.grid.set(GridState::from_load(result));
  });

  let keys = window_event_listener(ev::keydown, move |ev| state.handle_key(&ev.key()));
  on_cleanup(move || keys.remove());

  // Lock page scroll while the modal is up
  let is_open = create_memo(move |_| state.modal.with(Option::is_some));
  create_effect(move |was_open: Option<bool>| {
    let open = is_open.get();
    if was_open.unwrap_or(false) != open {
      if let Err(e) = dom::set_scroll_locked(open) {
        logging::warn!("Could not toggle page scroll: {}", e);
      }
    }
    open
  });

  view! {
    <div id="prop-grid" class="grid">
      {move || state.grid.with(|grid| match grid.message() {
        Some(message) => view! {
          <p class="grid-error" style="color: var(--color-muted)">{message}</p>
        }.into_view(),
        None => grid
          .cards()
          .into_iter()
          .map(|card| view! { <PropertyCard card=card/> })
          .collect_view(),
      })}
    </div>
    <PropertyModal/>
  }
}

#[component]
fn PropertyCard(card: CardView) -> impl IntoView {
  let state = use_context::<GalleryState>().expect("GalleryState not found");
  let id = card.id;
  let alt = card.title.clone();

  view! {
    <article
      class="card clickable"
      data-prop-id=id
      tabindex="0"
      aria-label=card.aria_label
      on:click=move |_| state.open(id)
      on:keydown=move |ev: web_sys::KeyboardEvent| {
        if activates_card(&ev.key()) {
          state.open(id);
        }
      }
    >
      {card.cover.map(|src| view! {
        <img class="card-media" src=src alt=alt loading="lazy"/>
      })}
      <div class="card-body">
        <h3 class="card-title">{card.title}</h3>
        <p class="card-meta">{card.address}</p>
        <p class="price">{card.price}</p>
      </div>
    </article>
  }
}

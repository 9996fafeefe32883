//! Contact form with live validation and a single POST on submit

use leptos::*;

use crate::contact::{
  submit_alert, ChoiceKind, ContactForm, Control, Field, InputKind, INVALID_FORM_ALERT,
};
use crate::web::{apiclient, dom};

#[component]
pub fn ContactFormView(endpoint: String) -> impl IntoView {
  let form = create_rw_signal(ContactForm::standard());
  let (submitting, set_submitting) = create_signal(false);
  let endpoint = store_value(endpoint);

  let on_submit = move |ev: web_sys::SubmitEvent| {
    ev.prevent_default();

    let valid = form.try_update(ContactForm::validate_all).unwrap_or(false);
    if !valid {
      dom::alert(INVALID_FORM_ALERT);
      return;
    }

    let payload = form.with_untracked(ContactForm::payload);
    let url = endpoint.get_value();
    set_submitting.set(true);

    spawn_local(async move {
      let result = apiclient::post_contact(&url, &payload).await;
      match &result {
        Ok(body) => logging::log!("Contact form response: {}", body),
        Err(e) => logging::error!("Contact form submission failed: {}", e),
      }
      dom::alert(submit_alert(&result));
      // Entered values survive a failed submission
      if result.is_ok() {
        form.update(ContactForm::reset);
      }
      set_submitting.set(false);
    });
  };

  let fields = form
    .with_untracked(|f| f.fields().to_vec())
    .into_iter()
    .map(|field| view! { <FormField field=field form=form/> })
    .collect_view();

  view! {
    <form id="contactoForm" class="contact-form" novalidate="" on:submit=on_submit>
      {fields}
      <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
        {move || if submitting.get() { "Enviando..." } else { "Enviar" }}
      </button>
    </form>
  }
}

#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
  let name = store_value(field.name.clone());
  let dom_id = format!("campo-{}", field.name);

  let status = move || {
    form.with(|f| {
      name.with_value(|n| f.field(n).and_then(|fl| fl.status().css_class()))
    })
    .unwrap_or("")
  };

  match field.control {
    Control::Input {
      kind,
      constraints,
      options,
      ..
    } => {
      let value = move || {
        form.with(|f| {
          name.with_value(|n| f.field(n).map(|fl| fl.value().to_string()))
        })
        .unwrap_or_default()
      };
      let on_input = move |ev: web_sys::Event| {
        let v = event_target_value(&ev);
        form.update(|f| {
          name.with_value(|n| f.input(n, v));
        });
      };

      let control = match kind {
        InputKind::Select => view! {
          <select
            id=dom_id.clone()
            name=field.name.clone()
            class=move || format!("input {}", status())
            required=constraints.required
            prop:value=value
            on:change=on_input
          >
            {options
              .into_iter()
              .map(|o| view! { <option value=o.value>{o.label}</option> })
              .collect_view()}
          </select>
        }
        .into_view(),
        InputKind::TextArea => view! {
          <textarea
            id=dom_id.clone()
            name=field.name.clone()
            class=move || format!("input {}", status())
            required=constraints.required
            minlength=constraints.min_len
            maxlength=constraints.max_len
            prop:value=value
            on:input=on_input
          ></textarea>
        }
        .into_view(),
        _ => view! {
          <input
            type=kind.input_type()
            id=dom_id.clone()
            name=field.name.clone()
            class=move || format!("input {}", status())
            required=constraints.required
            minlength=constraints.min_len
            maxlength=constraints.max_len
            pattern=constraints.pattern
            prop:value=value
            on:input=on_input
          />
        }
        .into_view(),
      };

      view! {
        <div class="form-group">
          <label for=dom_id>{field.label}</label>
          {control}
        </div>
      }
      .into_view()
    }
    Control::Choice { kind, options, .. } => {
      let input_type = match kind {
        ChoiceKind::Radio => "radio",
        ChoiceKind::Checkbox => "checkbox",
      };

      let members = options
        .into_iter()
        .map(|o| {
          let option = store_value(o.value.clone());
          let checked = move || {
            form.with(|f| {
              name.with_value(|n| {
                option.with_value(|v| f.field(n).is_some_and(|fl| fl.is_checked(v)))
              })
            })
          };
          let on_change = move |ev: web_sys::Event| {
            let on = event_target_checked(&ev);
            form.update(|f| {
              name.with_value(|n| option.with_value(|v| f.set_checked(n, v, on)));
            });
          };
          view! {
            <label class="choice">
              <input
                type=input_type
                name=name.get_value()
                value=o.value
                prop:checked=checked
                on:change=on_change
              />
              " "
              {o.label}
            </label>
          }
        })
        .collect_view();

      view! {
        <fieldset class=move || format!("form-group choice-group {}", status())>
          <legend>{field.label}</legend>
          {members}
        </fieldset>
      }
      .into_view()
    }
  }
}

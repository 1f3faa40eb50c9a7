//! Contact Form
//!
//! Posts the contact form to the relay without leaving the page and reports
//! the outcome in a banner under the form.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_core::contact::BANNER_EXIT_ANIMATION;
use folio_core::{
    BannerId, BannerKind, ContactForm, ContactView, FolioError, FolioResult, PageConfig, Relay,
    RelayResponse, SubmitControl,
};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::net::http::Request;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement};

use crate::dom;
use crate::scheduler::BrowserScheduler;

/// The form's submit button. Its label is markup (an icon plus text), so it
/// is read and written as HTML.
#[derive(Clone)]
struct SubmitButton(HtmlButtonElement);

impl SubmitControl for SubmitButton {
    fn label(&self) -> String {
        self.0.inner_html()
    }

    fn set_label(&self, label: &str) {
        self.0.set_inner_html(label);
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }
}

/// Form fields and the banners appended below them
#[derive(Clone)]
struct FormView {
    form: HtmlFormElement,
    banners: Rc<RefCell<HashMap<BannerId, Element>>>,
}

impl FormView {
    fn new(form: HtmlFormElement) -> Self {
        Self {
            form,
            banners: Rc::default(),
        }
    }

    fn build_banner(kind: BannerKind) -> FolioResult<Element> {
        let banner = document()
            .create_element("div")
            .map_err(|e| FolioError::Dom(dom::js_error(&e)))?;
        banner.set_class_name(&kind.class_name());
        banner.set_text_content(Some(kind.message()));
        banner
            .set_attribute("style", &kind.inline_style())
            .map_err(|e| FolioError::Dom(dom::js_error(&e)))?;
        Ok(banner)
    }
}

impl ContactView for FormView {
    fn reset_fields(&self) {
        self.form.reset();
    }

    fn insert_banner(&self, id: BannerId, kind: BannerKind) {
        let banner = match Self::build_banner(kind) {
            Ok(banner) => banner,
            Err(e) => {
                tracing::error!("Could not build {:?} banner: {}", kind, e);
                return;
            }
        };
        if let Err(e) = self.form.append_child(&banner) {
            tracing::error!("Could not show banner: {}", dom::js_error(&e));
            return;
        }
        self.banners.borrow_mut().insert(id, banner);
    }

    fn start_banner_exit(&self, id: BannerId) {
        if let Some(banner) = self.banners.borrow().get(&id) {
            if let Some(banner) = banner.dyn_ref::<HtmlElement>() {
                let _ = banner.style().set_property("animation", BANNER_EXIT_ANIMATION);
            }
        }
    }

    fn remove_banner(&self, id: BannerId) {
        if let Some(banner) = self.banners.borrow_mut().remove(&id) {
            banner.remove();
        }
    }
}

/// Posts the form as multipart data
struct FormRelay {
    form: HtmlFormElement,
    endpoint: String,
}

impl Relay for FormRelay {
    async fn send(&self) -> FolioResult<RelayResponse> {
        let data = FormData::new_with_form(&self.form)
            .map_err(|e| FolioError::Dom(dom::js_error(&e)))?;

        let response = Request::post(&self.endpoint)
            .body(data)
            .map_err(|e| FolioError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FolioError::Network(e.to_string()))?;

        tracing::debug!(status = response.status(), "relay answered");

        response
            .json::<RelayResponse>()
            .await
            .map_err(|e| FolioError::Decode(e.to_string()))
    }
}

pub fn attach(config: &PageConfig) -> FolioResult<()> {
    let selectors = &config.selectors;
    let form: HtmlFormElement = dom::by_id(&selectors.contact_form_id)?;
    let button: HtmlButtonElement = dom::query_in(&form, &selectors.submit_button)?;

    let controller = Rc::new(ContactForm::new(
        BrowserScheduler,
        FormView::new(form.clone()),
        config.banner,
    ));
    let relay = Rc::new(FormRelay {
        form: form.clone(),
        endpoint: config.relay_endpoint.clone(),
    });

    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();

            let controller = controller.clone();
            let relay = relay.clone();
            let button = SubmitButton(button.clone());
            spawn_local(async move {
                // An overlapping submit is already logged by the controller
                let _ = controller.submit(button, relay.as_ref()).await;
            });
        },
    )
    .forget();

    Ok(())
}

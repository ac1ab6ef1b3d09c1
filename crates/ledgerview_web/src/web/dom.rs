use std::cell::RefCell;
use std::rc::Rc;

use ledgerview::navigation::{NavController, NavSurface, Navigation, NavigationBinder};
use ledgerview::render::{Card, CardContainer, TextSlot};
use ledgerview::{DashboardConfig, DashboardError, DashboardUi};
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

const CONFIG_ELEMENT_ID: &str = "ledgerview-config";

/// Reads `<script type="application/json" id="ledgerview-config">`, if any.
pub(super) fn load_config(document: &Document) -> DashboardConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return DashboardConfig::default();
    };
    match DashboardConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "ignoring invalid dashboard config");
            DashboardConfig::default()
        }
    }
}

pub(super) fn dashboard_ui(
    document: &Document,
    config: &DashboardConfig,
) -> Result<DashboardUi, String> {
    Ok(DashboardUi {
        accounts_grid: Box::new(DomGrid::new(
            document,
            required(document, &config.accounts_grid_id)?,
        )),
        features_grid: Box::new(DomGrid::new(
            document,
            required(document, &config.features_grid_id)?,
        )),
        total_balance: Box::new(DomText(required(document, &config.total_balance_id)?)),
        credit_score: Box::new(DomText(required(document, &config.credit_score_id)?)),
        navigation: Box::new(DomNavigation {
            document: document.clone(),
            config: config.clone(),
        }),
    })
}

fn required(document: &Document, id: &str) -> Result<Element, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("document: missing #{id}"))
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, String> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| format!("document: bad selector {selector:?}"))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

struct DomGrid {
    document: Document,
    element: Element,
}

impl DomGrid {
    fn new(document: &Document, element: Element) -> Self {
        Self {
            document: document.clone(),
            element,
        }
    }

    fn text_element(
        &self,
        tag: &str,
        class: Option<&str>,
        text: &str,
    ) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        if let Some(class) = class {
            el.set_class_name(class);
        }
        el.set_text_content(Some(text));
        Ok(el)
    }

    fn build_card(&self, card: &Card) -> Result<Element, JsValue> {
        let el = self.document.create_element("div")?;
        el.set_class_name(card.class_name());
        match card {
            Card::Account {
                institution,
                balance,
                kind,
            } => {
                el.append_child(&self.text_element("h3", None, institution)?)?;
                el.append_child(&self.text_element("p", Some("balance"), balance)?)?;
                el.append_child(&self.text_element("p", Some("type"), kind)?)?;
            }
            Card::Feature { label } => el.set_text_content(Some(label.as_str())),
        }
        Ok(el)
    }
}

impl CardContainer for DomGrid {
    fn clear(&mut self) {
        self.element.set_text_content(None);
    }

    fn append(&mut self, card: &Card) {
        let res = self
            .build_card(card)
            .and_then(|el| self.element.append_child(&el).map(|_| ()));
        if res.is_err() {
            warn!(class = card.class_name(), "dom: failed to append card");
        }
    }
}

struct DomText(Element);

impl TextSlot for DomText {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

struct DomNavSurface {
    document: Document,
    buttons: Vec<Element>,
    sections: Vec<Element>,
    active_class: String,
}

impl NavSurface for DomNavSurface {
    fn deactivate_all(&mut self) {
        for el in self.buttons.iter().chain(self.sections.iter()) {
            let _ = el.class_list().remove_1(&self.active_class);
        }
    }

    fn activate_button(&mut self, index: usize) {
        if let Some(el) = self.buttons.get(index) {
            let _ = el.class_list().add_1(&self.active_class);
        }
    }

    fn activate_section(&mut self, section_id: &str) -> bool {
        match self.document.get_element_by_id(section_id) {
            Some(el) => {
                let _ = el.class_list().add_1(&self.active_class);
                true
            }
            None => false,
        }
    }
}

/// Binds one click handler per `nav_button_selector` match.
struct DomNavigation {
    document: Document,
    config: DashboardConfig,
}

impl NavigationBinder for DomNavigation {
    fn bind(&mut self) -> Result<usize, DashboardError> {
        let cfg = &self.config;
        let buttons =
            query_all(&self.document, &cfg.nav_button_selector).map_err(DashboardError::Dom)?;
        let sections =
            query_all(&self.document, &cfg.section_selector).map_err(DashboardError::Dom)?;

        let markup = buttons.iter().map(|b| {
            (
                b.get_attribute(&cfg.section_attribute),
                b.class_list().contains(&cfg.active_class),
            )
        });
        let nav = Navigation::from_buttons(markup, cfg);

        let controller = Rc::new(RefCell::new(NavController::new(
            nav,
            DomNavSurface {
                document: self.document.clone(),
                buttons: buttons.clone(),
                sections,
                active_class: cfg.active_class.clone(),
            },
        )));

        for (index, button) in buttons.iter().enumerate() {
            let controller = controller.clone();
            let on_click = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
                if let Ok(mut c) = controller.try_borrow_mut() {
                    c.click(index);
                }
            }) as Box<dyn FnMut(_)>);
            button
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .map_err(|_| DashboardError::Dom("nav: add_event_listener failed".to_string()))?;
            // Handlers live as long as the page.
            on_click.forget();
        }

        Ok(buttons.len())
    }
}

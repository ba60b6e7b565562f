use serde_json::{json, Value};

use crate::contact::ContactMethod;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsEvent {
    PageView { page: String },
    ButtonClick { button: String, location: String },
    FormSubmit { form: String, success: bool },
    ProjectView { project_id: u32, project_title: String },
    ContactMethod(ContactMethod),
    Navigation { section: String },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageView { .. } => "page_view",
            AnalyticsEvent::ButtonClick { .. } => "button_click",
            AnalyticsEvent::FormSubmit { .. } => "form_submit",
            AnalyticsEvent::ProjectView { .. } => "project_view",
            AnalyticsEvent::ContactMethod(_) => "contact_method_click",
            AnalyticsEvent::Navigation { .. } => "navigation",
        }
    }

    pub fn properties(&self) -> Value {
        match self {
            AnalyticsEvent::PageView { page } => json!({ "page": page }),
            AnalyticsEvent::ButtonClick { button, location } => {
                json!({ "button": button, "location": location })
            }
            AnalyticsEvent::FormSubmit { form, success } => {
                json!({ "form": form, "success": success })
            }
            AnalyticsEvent::ProjectView {
                project_id,
                project_title,
            } => json!({ "project_id": project_id, "project_title": project_title }),
            AnalyticsEvent::ContactMethod(method) => json!({ "method": method.as_str() }),
            AnalyticsEvent::Navigation { section } => json!({ "section": section }),
        }
    }
}

/// Fire-and-forget destination for analytics events.
pub trait AnalyticsSink {
    fn record(&self, event: &AnalyticsEvent);
}

/// Writes events to the log. Stand-in until a real provider is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn record(&self, event: &AnalyticsEvent) {
        log::info!("analytics event {} {}", event.name(), event.properties());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(String, Value)>>);

    impl AnalyticsSink for Recorder {
        fn record(&self, event: &AnalyticsEvent) {
            self.0
                .borrow_mut()
                .push((event.name().to_string(), event.properties()));
        }
    }

    #[test]
    fn form_submit_properties() {
        let event = AnalyticsEvent::FormSubmit {
            form: "contact".into(),
            success: true,
        };
        assert_eq!(event.name(), "form_submit");
        assert_eq!(event.properties(), json!({"form": "contact", "success": true}));
    }

    #[test]
    fn contact_method_uses_method_name() {
        let recorder = Recorder::default();
        recorder.record(&AnalyticsEvent::ContactMethod(ContactMethod::Whatsapp));
        let recorded = recorder.0.borrow();
        assert_eq!(recorded[0].0, "contact_method_click");
        assert_eq!(recorded[0].1, json!({"method": "whatsapp"}));
    }
}

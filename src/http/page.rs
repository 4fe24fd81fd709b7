use askama::Template;

use crate::form::{MeetingForm, DURATION_CHOICES};

/// One entry of the duration select
pub struct DurationOption {
    pub value: String,
    pub selected: bool,
}

/// The single page of the app: the form and its message region
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub form: &'a MeetingForm,
    pub auth_url: &'a str,
    pub durations: Vec<DurationOption>,
}

impl<'a> IndexPage<'a> {
    pub fn new(form: &'a MeetingForm, auth_url: &'a str) -> Self {
        Self {
            form,
            auth_url,
            durations: duration_options(&form.fields().duration),
        }
    }
}

/// The fixed choices, plus the submitted value when it is not one of them
/// so a re-rendered form resubmits what the user sent
fn duration_options(current: &str) -> Vec<DurationOption> {
    let current = current.trim();
    let mut options: Vec<DurationOption> = DURATION_CHOICES
        .iter()
        .map(|minutes| {
            let value = minutes.to_string();
            DurationOption {
                selected: value == current,
                value,
            }
        })
        .collect();

    if !current.is_empty() && !options.iter().any(|option| option.selected) {
        options.push(DurationOption {
            value: current.to_string(),
            selected: true,
        });
    }

    options
}

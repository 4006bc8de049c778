//! Event field flags and interactive prompts shared by `add` and `edit`.

use anyhow::Result;
use calgrid_core::EventDraft;
use calgrid_core::time::{parse_date, parse_time};
use clap::Args;
use dialoguer::Input;
use owo_colors::OwoColorize;

#[derive(Args, Default)]
pub struct FieldArgs {
    /// Event title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Start time (HH:MM, 24-hour)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End time (HH:MM, 24-hour)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Attendees, as free text
    #[arg(short, long)]
    pub attendees: Option<String>,
}

impl FieldArgs {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.attendees.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.title.is_some()
            && self.date.is_some()
            && self.start.is_some()
            && self.end.is_some()
            && self.attendees.is_some()
    }

    /// Overwrite the draft's fields with the flags that were given.
    pub fn apply(&self, draft: &mut EventDraft) {
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(date) = &self.date {
            draft.date = date.clone();
        }
        if let Some(start) = &self.start {
            draft.start_time = start.clone();
        }
        if let Some(end) = &self.end {
            draft.end_time = end.clone();
        }
        if let Some(attendees) = &self.attendees {
            draft.attendees = attendees.clone();
        }
    }
}

/// Prompt for every field not given as a flag, offering the draft's current
/// value as the default.
pub fn prompt(mut draft: EventDraft, given: &FieldArgs) -> Result<EventDraft> {
    if given.title.is_none() {
        draft.title = prompt_with_retry("  Title", &draft.title, |s| {
            mandatory(s, "Event title is mandatory")
        })?;
    }

    if given.date.is_none() {
        draft.date = prompt_with_retry("  Date", &draft.date, |s| {
            parse_date(s).map(|_| ()).map_err(|e| e.to_string())
        })?;
    }

    if given.start.is_none() {
        draft.start_time = prompt_with_retry("  Start time", &draft.start_time, |s| {
            parse_time(s).map(|_| ()).map_err(|e| e.to_string())
        })?;
    }

    if given.end.is_none() {
        let start = parse_time(&draft.start_time).ok();
        draft.end_time = prompt_with_retry("  End time", &draft.end_time, |s| {
            let end = parse_time(s).map_err(|e| e.to_string())?;
            match start {
                Some(start) if end <= start => Err("End time must be after start time".to_string()),
                _ => Ok(()),
            }
        })?;
    }

    if given.attendees.is_none() {
        draft.attendees = prompt_with_retry("  Attendees", &draft.attendees, |s| {
            mandatory(s, "Attendees is mandatory")
        })?;
    }

    Ok(draft)
}

/// Prompt the user with retry on invalid input.
fn prompt_with_retry<F>(prompt: &str, current: &str, check: F) -> Result<String>
where
    F: Fn(&str) -> std::result::Result<(), String>,
{
    loop {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if !current.is_empty() {
            input = input.default(current.to_string());
        }

        let value: String = input.interact_text()?;

        match check(&value) {
            Ok(()) => return Ok(value),
            Err(e) => {
                eprintln!("  {}", e.red());
            }
        }
    }
}

fn mandatory(value: &str, message: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_overwrites_given_fields() {
        let mut draft = EventDraft {
            title: "Old".to_string(),
            date: "2025-03-20".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            attendees: "alice".to_string(),
        };
        let args = FieldArgs {
            title: Some("New".to_string()),
            end: Some("11:00".to_string()),
            ..Default::default()
        };

        args.apply(&mut draft);

        assert_eq!(draft.title, "New");
        assert_eq!(draft.end_time, "11:00");
        assert_eq!(draft.start_time, "09:00");
        assert_eq!(draft.attendees, "alice");
    }

    #[test]
    fn test_completeness() {
        assert!(FieldArgs::default().is_empty());
        assert!(!FieldArgs::default().is_complete());

        let args = FieldArgs {
            title: Some("t".to_string()),
            date: Some("2025-03-20".to_string()),
            start: Some("09:00".to_string()),
            end: Some("10:00".to_string()),
            attendees: Some("a".to_string()),
        };
        assert!(args.is_complete());
        assert!(!args.is_empty());
    }

    #[test]
    fn test_mandatory() {
        assert!(mandatory("x", "m").is_ok());
        assert_eq!(mandatory("", "Attendees is mandatory"), Err("Attendees is mandatory".to_string()));
    }
}

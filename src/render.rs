//! Terminal rendering for registry types.

use eventry_core::attendee::Attendee;
use eventry_core::event::Event;
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering.
pub trait Render {
    /// Multi-line detail block.
    fn render(&self) -> String;

    /// Single-line summary for list output.
    fn render_line(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let lines = [
            format!("{} {}", "ID:".dimmed(), self.id),
            format!("{} {}", "Type:".dimmed(), self.kind),
            format!("{} {}", "Name:".dimmed(), self.name),
            format!("{} {}", "Date:".dimmed(), self.date),
            format!("{} {}", "Time:".dimmed(), self.time),
            format!("{} {}", "Location:".dimmed(), self.location),
            // The one line that differs by kind
            format!("{} {}", format!("{}:", self.kind.role_label()).dimmed(), self.role_value),
        ];
        lines.join("\n")
    }

    fn render_line(&self) -> String {
        format!(
            "{:>4}  {:<8}  {}  {} {}  {}",
            self.id.bold(),
            self.kind,
            self.name,
            self.date,
            self.time,
            self.location.dimmed(),
        )
    }
}

impl Render for Attendee {
    fn render(&self) -> String {
        let lines = [
            format!("{} {}", "Person ID:".dimmed(), self.id),
            format!("{} {}", "Name:".dimmed(), self.first_name),
            format!("{} {}", "Surname:".dimmed(), self.surname),
            format!("{} {}", "Email:".dimmed(), self.email),
            format!("{} {}", "Phone:".dimmed(), self.phone),
        ];
        lines.join("\n")
    }

    fn render_line(&self) -> String {
        format!(
            "{:>4}  {} {}  {}  {}",
            self.id.bold(),
            self.first_name,
            self.surname,
            self.email,
            self.phone.dimmed(),
        )
    }
}

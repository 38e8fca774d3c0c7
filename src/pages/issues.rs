use leptos::*;

use crate::components::actions::RowActions;
use crate::components::input::SearchBox;
use crate::i18n::{use_language, Language};
use crate::models::{IssuePriority, IssueStatus, IssueTicket};
use crate::utils::matches_query;

struct Text {
    title: &'static str,
    subtitle: &'static str,
    search: &'static str,
    new_ticket: &'static str,
    id: &'static str,
    ticket: &'static str,
    location: &'static str,
    reported_by: &'static str,
    date: &'static str,
    priority: &'static str,
    status: &'static str,
    actions: &'static str,
    high: &'static str,
    medium: &'static str,
    low: &'static str,
    open: &'static str,
    in_progress: &'static str,
    resolved: &'static str,
}

const EN: Text = Text {
    title: "Issue Management",
    subtitle: "Track maintenance tickets and customer complaints",
    search: "Search tickets...",
    new_ticket: "New Ticket",
    id: "Ticket ID",
    ticket: "Issue",
    location: "Location",
    reported_by: "Reported By",
    date: "Date",
    priority: "Priority",
    status: "Status",
    actions: "Actions",
    high: "High",
    medium: "Medium",
    low: "Low",
    open: "Open",
    in_progress: "In Progress",
    resolved: "Resolved",
};

const HI: Text = Text {
    title: "समस्या प्रबंधन",
    subtitle: "रखरखाव टिकट और ग्राहक शिकायतें ट्रैक करें",
    search: "टिकट खोजें...",
    new_ticket: "नया टिकट",
    id: "टिकट आईडी",
    ticket: "समस्या",
    location: "स्थान",
    reported_by: "रिपोर्टकर्ता",
    date: "तारीख",
    priority: "प्राथमिकता",
    status: "स्थिति",
    actions: "क्रियाएं",
    high: "उच्च",
    medium: "मध्यम",
    low: "निम्न",
    open: "खुला",
    in_progress: "प्रगति पर",
    resolved: "हल हो गया",
};

fn text(lang: Language) -> &'static Text {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
    }
}

const TICKETS: &[IssueTicket] = &[
    IssueTicket { id: "ISS-101", title: "Escalator not working near food court", location: "Second Floor", reported_by: "Security Desk", date: "2024-06-08", priority: IssuePriority::High, status: IssueStatus::InProgress },
    IssueTicket { id: "ISS-102", title: "AC temperature too low in west wing", location: "First Floor, West Wing", reported_by: "Mumbai Fashion", date: "2024-06-09", priority: IssuePriority::Medium, status: IssueStatus::Open },
    IssueTicket { id: "ISS-103", title: "Parking gate barrier stuck", location: "Basement Parking B1", reported_by: "Parking Attendant", date: "2024-06-09", priority: IssuePriority::High, status: IssueStatus::Open },
    IssueTicket { id: "ISS-104", title: "Water leakage in restroom", location: "Ground Floor", reported_by: "Housekeeping", date: "2024-06-10", priority: IssuePriority::Medium, status: IssueStatus::Resolved },
    IssueTicket { id: "ISS-105", title: "Flickering light in corridor", location: "First Floor, F-Block", reported_by: "Kolkata Books", date: "2024-06-11", priority: IssuePriority::Low, status: IssueStatus::Resolved },
    IssueTicket { id: "ISS-106", title: "Billing counter printer jam", location: "Ground Floor, G-22", reported_by: "Delhi Sweets", date: "2024-06-12", priority: IssuePriority::Low, status: IssueStatus::Open },
];

fn priority_label(t: &'static Text, priority: IssuePriority) -> &'static str {
    match priority {
        IssuePriority::High => t.high,
        IssuePriority::Medium => t.medium,
        IssuePriority::Low => t.low,
    }
}

fn priority_class(priority: IssuePriority) -> &'static str {
    match priority {
        IssuePriority::High => "badge badge-red",
        IssuePriority::Medium => "badge badge-orange",
        IssuePriority::Low => "badge badge-blue",
    }
}

fn status_label(t: &'static Text, status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::Open => t.open,
        IssueStatus::InProgress => t.in_progress,
        IssueStatus::Resolved => t.resolved,
    }
}

fn status_class(status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::Open => "badge badge-orange",
        IssueStatus::InProgress => "badge badge-blue",
        IssueStatus::Resolved => "badge badge-green",
    }
}

fn filtered(query: &str) -> Vec<IssueTicket> {
    TICKETS
        .iter()
        .copied()
        .filter(|ticket| {
            matches_query(
                &[
                    ticket.id,
                    ticket.title,
                    ticket.location,
                    ticket.reported_by,
                    ticket.priority.as_str(),
                    ticket.status.as_str(),
                ],
                query,
            )
        })
        .collect()
}

#[component]
pub fn IssuesPage() -> impl IntoView {
    let language = use_language();
    let (query, set_query) = create_signal(String::new());

    view! {
        {move || {
            let t = text(language.get());
            view! {
                <div style="display: flex; flex-direction: column; gap: 1.5rem;">
                    <div style="display: flex; align-items: center; gap: 1rem; flex-wrap: wrap;">
                        <div style="margin-right: auto;">
                            <h1 style="font-size: 2rem; font-weight: 700; color: var(--text-heading); margin: 0;">{t.title}</h1>
                            <p style="color: var(--text-muted); margin: 0.5rem 0 0 0;">{t.subtitle}</p>
                        </div>
                        <button class="btn-primary">{t.new_ticket}</button>
                    </div>

                    <div style="background: var(--bg-surface); border-radius: var(--radius-lg); border: 1px solid var(--border-subtle);">
                        <div style="padding: 1.5rem;">
                            <SearchBox placeholder=t.search value=query set_value=set_query/>
                        </div>
                        <div style="overflow-x: auto;">
                            <table style="width: 100%; border-collapse: collapse;">
                                <thead>
                                    <tr style="background-color: var(--bg-subtle); text-align: left;">
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.id}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.ticket}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.location}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.reported_by}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.date}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.priority}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.status}</th>
                                        <th style="padding: 1rem; border-bottom: 1px solid var(--border-subtle);">{t.actions}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || filtered(&query.get())
                                        key=|ticket| ticket.id
                                        children=move |ticket| view! {
                                            <tr style="border-bottom: 1px solid var(--border-subtle);">
                                                <td style="padding: 1rem; font-family: monospace; font-size: 0.85rem;">{ticket.id}</td>
                                                <td style="padding: 1rem; font-weight: 600;">{ticket.title}</td>
                                                <td style="padding: 1rem;">{ticket.location}</td>
                                                <td style="padding: 1rem;">{ticket.reported_by}</td>
                                                <td style="padding: 1rem;">{ticket.date}</td>
                                                <td style="padding: 1rem;">
                                                    <span class=priority_class(ticket.priority)>{priority_label(t, ticket.priority)}</span>
                                                </td>
                                                <td style="padding: 1rem;">
                                                    <span class=status_class(ticket.status)>{status_label(t, ticket.status)}</span>
                                                </td>
                                                <td style="padding: 1rem;">
                                                    <RowActions/>
                                                </td>
                                            </tr>
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            }
        }}
    }
}

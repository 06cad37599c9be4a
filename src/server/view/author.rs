use entity::sea_orm_active_enums::{ApplicationStatus, ContractType};
use maud::{html, Markup};

use crate::{
    model::{
        contract::{ApplicationDto, ContractsOverviewDto},
        notification::NotificationDto,
    },
    server::view::{contract_label, datetime, layout::page, money, status_label, PageContext},
};

pub fn contracts_page(ctx: &PageContext, overview: &ContractsOverviewDto) -> Markup {
    page(
        "My contracts",
        ctx,
        html! {
            @if overview.books.is_empty() {
                p class="empty" { "No signed books yet. " a href="/author/apply" { "Apply for a contract" } }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Title" } th { "Pen name" } th { "Contract" }
                            th { "Buyout fee" } th { "Royalty " (overview.month) } th { "Earlier months" }
                        }
                    }
                    tbody {
                        @for entry in &overview.books {
                            tr {
                                td { (entry.book.title) }
                                td { (entry.book.pen_name) }
                                td { (contract_label(entry.book.contract_type)) }
                                td {
                                    @if let Some(amount) = entry.book.buyout_amount { (money(amount)) }
                                }
                                td {
                                    @match (entry.book.contract_type, entry.current_royalty) {
                                        (ContractType::Guaranteed, Some(amount)) => { (money(amount)) }
                                        (ContractType::Guaranteed, None) => { span class="muted" { "Not set" } }
                                        _ => {}
                                    }
                                }
                                td {
                                    @for royalty in &entry.history {
                                        div { (royalty.month) ": " (money(royalty.amount)) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn apply_page(ctx: &PageContext) -> Markup {
    page(
        "Apply for a contract",
        ctx,
        html! {
            form method="post" action="/author/apply" class="card" {
                label { "Book title" input type="text" name="title" required; }
                label { "Pen name" input type="text" name="pen_name" required; }
                label {
                    "Contract type"
                    select name="contract_type" {
                        option value="guaranteed" { "Guaranteed (monthly royalty)" }
                        option value="buyout" { "Buyout (one-off fee)" }
                    }
                }
                button type="submit" { "Submit application" }
            }
        },
    )
}

pub fn results_page(ctx: &PageContext, applications: &[ApplicationDto]) -> Markup {
    page(
        "Application results",
        ctx,
        html! {
            @if applications.is_empty() {
                p class="empty" { "You have not submitted any applications." }
            } @else {
                table {
                    thead {
                        tr { th { "Title" } th { "Pen name" } th { "Contract" } th { "Status" } th { "Submitted" } th { "Processed" } th { "Reason" } }
                    }
                    tbody {
                        @for application in applications {
                            tr {
                                td { (application.title) }
                                td { (application.pen_name) }
                                td { (contract_label(application.contract_type)) }
                                td class={ "status status-" (application.status.as_str()) } { (status_label(application.status)) }
                                td { (datetime(&application.created_at)) }
                                td { @if let Some(at) = &application.processed_at { (datetime(at)) } }
                                td {
                                    @if application.status == ApplicationStatus::Rejected {
                                        @if let Some(reason) = &application.reject_reason { (reason) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn notifications_page(ctx: &PageContext, notifications: &[NotificationDto]) -> Markup {
    page(
        "Notifications",
        ctx,
        html! {
            @if notifications.iter().any(|n| !n.is_read) {
                form method="post" action="/author/notifications/read" {
                    button type="submit" { "Mark all as read" }
                }
            }
            @if notifications.is_empty() {
                p class="empty" { "No notifications." }
            }
            ul class="notifications" {
                @for notification in notifications {
                    li class=(if notification.is_read { "read" } else { "unread" }) {
                        span class="when" { (datetime(&notification.created_at)) }
                        span class="message" { (notification.message) }
                        @if !notification.is_read {
                            form method="post" action="/author/notifications/read_one" class="inline" {
                                input type="hidden" name="id" value=(notification.id);
                                button type="submit" { "Mark read" }
                            }
                        }
                    }
                }
            }
        },
    )
}

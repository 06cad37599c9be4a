use entity::sea_orm_active_enums::{ApplicationStatus, ContractType, Role};
use maud::{html, Markup};

use crate::{
    model::{
        contract::{ApplicationDto, BookDto, RoyaltyRowDto},
        user::UserDto,
    },
    server::view::{contract_label, datetime, layout::page, money, status_label, PageContext},
};

pub fn applications_page(ctx: &PageContext, applications: &[ApplicationDto]) -> Markup {
    page(
        "Applications",
        ctx,
        html! {
            @if applications.is_empty() {
                p class="empty" { "No applications yet." }
            } @else {
                table {
                    thead {
                        tr { th { "#" } th { "Author" } th { "Title" } th { "Pen name" } th { "Contract" } th { "Status" } th { "Submitted" } th { "Reviewer" } th { "Action" } }
                    }
                    tbody {
                        @for application in applications {
                            tr {
                                td { (application.id) }
                                td { (application.author_username) }
                                td { (application.title) }
                                td { (application.pen_name) }
                                td { (contract_label(application.contract_type)) }
                                td class={ "status status-" (application.status.as_str()) } {
                                    (status_label(application.status))
                                    @if let Some(reason) = &application.reject_reason { br; small { (reason) } }
                                }
                                td { (datetime(&application.created_at)) }
                                td { @if let Some(reviewer) = &application.reviewer_username { (reviewer) } }
                                td {
                                    @if application.status == ApplicationStatus::Pending {
                                        (review_forms(application))
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

fn review_forms(application: &ApplicationDto) -> Markup {
    html! {
        form method="post" action="/admin/apps" class="inline" {
            input type="hidden" name="action" value="approve_app";
            input type="hidden" name="app_id" value=(application.id);
            @if application.contract_type == ContractType::Buyout {
                input type="number" name="buyout_amount" min="0" step="0.01" placeholder="Buyout fee" required;
            }
            button type="submit" { "Approve" }
        }
        form method="post" action="/admin/apps" class="inline" {
            input type="hidden" name="action" value="reject_app";
            input type="hidden" name="app_id" value=(application.id);
            input type="text" name="reason" placeholder="Reason";
            button type="submit" class="danger" { "Reject" }
        }
    }
}

pub fn royalties_page(ctx: &PageContext, month: &str, rows: &[RoyaltyRowDto]) -> Markup {
    page(
        "Monthly royalties",
        ctx,
        html! {
            form method="get" action="/admin/royalties" class="inline" {
                label { "Month" input type="month" name="month" value=(month); }
                button type="submit" { "Show" }
            }
            @if rows.is_empty() {
                p class="empty" { "No books yet." }
            } @else {
                table {
                    thead {
                        tr { th { "#" } th { "Title" } th { "Author" } th { "Contract" } th { "Royalty " (month) } th { "Set" } }
                    }
                    tbody {
                        @for row in rows {
                            tr {
                                td { (row.book.id) }
                                td { (row.book.title) }
                                td { (row.book.author_username) }
                                td { (contract_label(row.book.contract_type)) }
                                td { @if let Some(amount) = row.amount { (money(amount)) } }
                                td {
                                    @if row.book.contract_type == ContractType::Guaranteed {
                                        form method="post" action="/admin/royalties" class="inline" {
                                            input type="hidden" name="book_id" value=(row.book.id);
                                            input type="hidden" name="month" value=(month);
                                            input type="number" name="amount" min="0" step="0.01" required;
                                            button type="submit" { "Save" }
                                        }
                                    } @else {
                                        span class="muted" { "Buyout" }
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

pub fn books_page(ctx: &PageContext, books: &[BookDto]) -> Markup {
    page(
        "Books",
        ctx,
        html! {
            @if books.is_empty() {
                p class="empty" { "No books yet." }
            } @else {
                table {
                    thead {
                        tr { th { "#" } th { "Title" } th { "Author" } th { "Pen name" } th { "Contract" } th { "Buyout fee" } th { "Created" } th {} }
                    }
                    tbody {
                        @for book in books {
                            tr {
                                td { (book.id) }
                                td { (book.title) }
                                td { (book.author_username) }
                                td { (book.pen_name) }
                                td { (contract_label(book.contract_type)) }
                                td { @if let Some(amount) = book.buyout_amount { (money(amount)) } }
                                td { (datetime(&book.created_at)) }
                                td {
                                    form method="post" action="/admin/books/delete" class="inline" {
                                        input type="hidden" name="book_id" value=(book.id);
                                        button type="submit" class="danger" { "Delete" }
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

pub fn users_page(ctx: &PageContext, users: &[UserDto], current_user_id: i32) -> Markup {
    page(
        "Users",
        ctx,
        html! {
            table {
                thead {
                    tr { th { "#" } th { "Username" } th { "Role" } th { "Created" } th {} }
                }
                tbody {
                    @for user in users {
                        tr {
                            td { (user.id) }
                            td { (user.username) }
                            td { (user.role.as_str()) }
                            td { (datetime(&user.created_at)) }
                            td {
                                @if user.role == Role::Admin && user.id != current_user_id {
                                    form method="post" action="/admin/users/delete" class="inline" {
                                        input type="hidden" name="user_id" value=(user.id);
                                        button type="submit" class="danger" { "Delete" }
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

pub fn management_page(ctx: &PageContext, verified: bool, admins: &[UserDto]) -> Markup {
    page(
        "Admin management",
        ctx,
        html! {
            @if !verified {
                form method="post" action="/admin/management" class="card" {
                    label { "Access key" input type="password" name="access_key" required; }
                    button type="submit" { "Unlock" }
                }
            } @else {
                h2 { "Admins" }
                table {
                    thead { tr { th { "#" } th { "Username" } th { "Delete" } } }
                    tbody {
                        @for admin in admins {
                            tr {
                                td { (admin.id) }
                                td { (admin.username) }
                                td {
                                    form method="post" action="/admin/delete" class="inline" {
                                        input type="hidden" name="admin_id" value=(admin.id);
                                        input type="password" name="delete_key" placeholder="Delete key" required;
                                        button type="submit" class="danger" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
                h2 { "New admin" }
                form method="post" action="/admin/register" class="card" {
                    label { "Username" input type="text" name="username" required; }
                    label { "Password" input type="password" name="password" autocomplete="new-password" required; }
                    button type="submit" { "Create admin" }
                }
                form method="post" action="/admin/logout" {
                    button type="submit" { "Lock" }
                }
            }
        },
    )
}

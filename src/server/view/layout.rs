use maud::{html, Markup, DOCTYPE};

use crate::server::view::PageContext;

/// Wraps page content with the document head, navigation and flash messages.
pub fn page(title: &str, ctx: &PageContext, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Contract Desk" }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                header {
                    a class="brand" href="/" { "Contract Desk" }
                    (navigation(ctx))
                }
                main {
                    @for flash in &ctx.flashes {
                        div class={ "flash flash-" (flash.kind.as_str()) } { (flash.message) }
                    }
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}

fn navigation(ctx: &PageContext) -> Markup {
    html! {
        nav {
            @match &ctx.user {
                Some(user) if user.is_admin() => {
                    a href="/admin/apps" { "Applications" }
                    a href="/admin/royalties" { "Royalties" }
                    a href="/admin/books" { "Books" }
                    a href="/admin/users" { "Users" }
                    a href="/admin/management" { "Management" }
                    span class="who" { (user.username) }
                    a href="/logout" { "Log out" }
                }
                Some(user) => {
                    a href="/author/contracts" { "My contracts" }
                    a href="/author/apply" { "Apply" }
                    a href="/author/results" { "Results" }
                    a href="/author/notifications" {
                        "Notifications"
                        @if ctx.unread_notifications > 0 {
                            " " span class="badge" { (ctx.unread_notifications) }
                        }
                    }
                    span class="who" { (user.username) }
                    a href="/logout" { "Log out" }
                }
                None => {
                    a href="/login" { "Log in" }
                    a href="/register" { "Register" }
                }
            }
        }
    }
}

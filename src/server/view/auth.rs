use maud::{html, Markup};

use crate::server::view::{layout::page, PageContext};

pub fn login_page(ctx: &PageContext) -> Markup {
    page(
        "Log in",
        ctx,
        html! {
            form method="post" action="/login" class="card" {
                label { "Username" input type="text" name="username" autocomplete="username" required; }
                label { "Password" input type="password" name="password" autocomplete="current-password" required; }
                button type="submit" { "Log in" }
            }
            p { "No account yet? " a href="/register" { "Register as an author" } }
        },
    )
}

pub fn register_page(ctx: &PageContext) -> Markup {
    page(
        "Register",
        ctx,
        html! {
            form method="post" action="/register" class="card" {
                label { "Username" input type="text" name="username" autocomplete="username" required; }
                label { "Password" input type="password" name="password" autocomplete="new-password" required; }
                button type="submit" { "Create account" }
            }
            p { "Already registered? " a href="/login" { "Log in" } }
        },
    )
}

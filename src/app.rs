mod about;
mod contact;
mod education;
mod footer;
mod header;
mod hero;
mod navigation;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{config::NavConfig, content::OWNER};
use about::About;
use contact::Contact;
use education::Education;
use footer::Footer;
use header::Header;
use hero::Hero;
use navigation::NavContext;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased text-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", OWNER.name) />
        <Meta name="description" content=OWNER.tagline />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio, one section after another.
#[component]
fn HomePage() -> impl IntoView {
    provide_context(NavContext::new(NavConfig::default()));

    view! {
        <Title text=OWNER.role />
        <Header />
        <main class="overflow-x-hidden">
            <Hero />
            <About />
            <Education />
            <Projects />
            <Skills />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page not found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="font-bold text-2xl">"Page not found."</h1>
            <a href="/" class="text-blue-600 hover:underline">"Back to the portfolio"</a>
        </main>
    }
}

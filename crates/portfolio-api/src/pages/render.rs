use maud::{DOCTYPE, Markup, html};

use portfolio_types::TimelinePost;

use super::content::{Page, PageBody, PageId, Profile};

const STYLESHEET: &str = "./static/styles/light/main.css";

/// Turns page content into markup.
pub trait PageRenderer: Send + Sync {
    fn render(&self, page: &Page<'_>) -> String;
}

/// HTML pages built with maud. Every interpolated value is escaped.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl PageRenderer for HtmlRenderer {
    fn render(&self, page: &Page<'_>) -> String {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (page.title) }
                    link rel="stylesheet" href=(STYLESHEET);
                }
                body {
                    (nav(page.id))
                    (profile(page.profile))
                    main id=(page.id.id()) {
                        (body(&page.body))
                    }
                }
            }
        }
        .into_string()
    }
}

fn nav(active: PageId) -> Markup {
    html! {
        nav {
            ul.nav {
                @for id in PageId::ALL {
                    li class=[(id == active).then_some("active")] {
                        a href=(id.path()) { (id.label()) }
                    }
                }
            }
        }
    }
}

fn profile(profile: &Profile) -> Markup {
    html! {
        header.profile {
            h1 { (profile.name) }
            p.position { (profile.position) }
            @if !profile.url.is_empty() {
                a.site href=(profile.url) { (profile.url) }
            }
            @for social in &profile.socials {
                a.social href=(social.url) {
                    img src=(social.icon) alt=(social.name);
                }
            }
        }
    }
}

fn body(body: &PageBody) -> Markup {
    html! {
        @match body {
            PageBody::Home {} => {}
            PageBody::About { quote, author } => {
                blockquote { (quote) cite { (author) } }
            }
            PageBody::Work { jobs } => {
                @for job in jobs {
                    section.job {
                        h2 { (job.name) }
                        p { (job.location) " · " (job.contact) }
                        p { (job.description) }
                    }
                }
            }
            PageBody::Education { educations } => {
                @for edu in educations {
                    section.education {
                        h2 { (edu.school) }
                        p {
                            (edu.degree)
                            @if let Some(major) = edu.major {
                                ", " (major)
                            }
                        }
                        p { (edu.years) }
                    }
                }
            }
            PageBody::Hobbies { hobbies } => {
                @for hobby in hobbies {
                    section.hobby {
                        h2 { (hobby.name) }
                        img src=(hobby.img) alt=(hobby.name);
                        p { (hobby.desc) }
                    }
                }
            }
            PageBody::WhereAmI { places } => {
                @for place in places {
                    section.place data-lat=(place.coords[0]) data-lng=(place.coords[1]) {
                        h2 { (place.name) }
                        p { (place.description) }
                    }
                }
            }
            PageBody::Timeline { timeline_posts } => {
                (timeline(timeline_posts))
            }
        }
    }
}

fn timeline(posts: &[TimelinePost]) -> Markup {
    html! {
        ul.timeline-wrapper {
            @for post in posts {
                li.timeline-post {
                    h3 { (post.name) }
                    a href={ "mailto:" (post.email) } { (post.email) }
                    time datetime=(post.created_at.to_rfc3339()) {
                        (post.created_at.format("%B %-d, %Y %H:%M").to_string())
                    }
                    p { (post.content) }
                }
            }
        }
    }
}

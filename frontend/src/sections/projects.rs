use site_core::analytics::AnalyticsEvent;
use site_core::content::{Project, PROJECTS};
use yew::prelude::*;

use crate::i18n::use_i18n;
use crate::navigation::use_navigation;
use crate::utils::analytics::track;

/// Cards shown in the grid; the rest live in the recent-work carousel.
const FEATURED: usize = 5;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    cta: AttrValue,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let onclick = Callback::from(move |_: MouseEvent| {
        track(AnalyticsEvent::ProjectView {
            project_id: project.id,
            project_title: project.title.to_string(),
        });
    });
    html! {
        <a
            class={classes!("project-card", project.emphasis.then_some("emphasis"))}
            href={project.href}
            target="_blank"
            rel="noopener noreferrer"
            {onclick}
        >
            <img class="project-image gray" src={project.image_gray} alt={project.title} loading="lazy" />
            <img class="project-image color" src={project.image_color} alt="" aria-hidden="true" loading="lazy" />
            <div class="project-overlay">
                <h3>{ project.title }</h3>
                <p>{ project.description }</p>
                <span class="project-cta">{ props.cta.clone() }</span>
            </div>
        </a>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let i18n = use_i18n();
    let nav = use_navigation();
    let cta: AttrValue = i18n.t("projects.viewCase").into();

    html! {
        <section id="projects" data-section="projects" tabindex="-1" class="section projects">
            <h2 class="section-title">{ i18n.t("projects.title") }</h2>
            <div class="project-grid">
                { for PROJECTS.iter().take(FEATURED).map(|project| html! {
                    <ProjectCard key={project.id} project={*project} cta={cta.clone()} />
                }) }
            </div>
            <div class="section-actions">
                <button type="button" class="button primary" onclick={nav.navigate_callback::<MouseEvent>("recent-work")}>
                    { i18n.t("projects.allProjects") }
                </button>
                <button type="button" class="button secondary" onclick={nav.navigate_callback::<MouseEvent>("about")}>
                    { i18n.t("projects.aboutMe") }
                </button>
            </div>
        </section>
    }
}

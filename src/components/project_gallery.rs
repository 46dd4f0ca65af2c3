use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::catalog::{CATEGORIES, PROJECTS};
use crate::filter::ProjectFilter;

/// Delay before the entrance animation replays after a category change.
const ENTRANCE_DELAY_MS: u32 = 100;

/// Per-card stagger applied through transition-delay.
const STAGGER_STEP_MS: usize = 100;

#[function_component(ProjectGallery)]
pub fn project_gallery() -> Html {
    let filter = use_state(ProjectFilter::default);
    let cards_in = use_state(|| false);

    // Replay the entrance whenever the category changes: drop the flag, then
    // raise it again after a short delay. The Timeout handle lives in the
    // effect cleanup, so a newer selection cancels a still-pending replay.
    {
        let cards_in = cards_in.clone();
        use_effect_with_deps(
            move |_| {
                cards_in.set(false);
                let timer = Timeout::new(ENTRANCE_DELAY_MS, move || {
                    cards_in.set(true);
                });
                move || drop(timer)
            },
            filter.active_category().to_string(),
        );
    }

    let visible = filter.visible(PROJECTS);

    html! {
        <section id="projects" class="projects-section">
            <style>
                {r#"
                    .projects-section {
                        padding: 4rem 1rem;
                        background: #f4f6fa;
                    }
                    .projects-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .projects-heading {
                        text-align: center;
                        margin-bottom: 2.5rem;
                    }
                    .projects-heading h2 {
                        font-size: 2rem;
                        margin: 0 0 1rem;
                        color: #1a1a1a;
                    }
                    .projects-heading p {
                        color: #666;
                        max-width: 600px;
                        margin: 0 auto 2rem;
                    }
                    .category-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .category-badge {
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 999px;
                        background: #fff;
                        color: #555;
                        font-size: 0.9rem;
                        cursor: pointer;
                        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06);
                        transition: transform 0.3s, background 0.3s, color 0.3s;
                    }
                    .category-badge:hover { transform: scale(1.05); }
                    .category-badge.active {
                        background: linear-gradient(90deg, #1e6fd9, #e67e22);
                        color: #fff;
                        transform: scale(1.05);
                    }
                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .project-card {
                        position: relative;
                        border-radius: 16px;
                        overflow: hidden;
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.1);
                        opacity: 0;
                        transform: translateY(2rem);
                        transition: opacity 0.5s, transform 0.5s;
                    }
                    .project-card.entered {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .project-card img {
                        display: block;
                        width: 100%;
                        height: 260px;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .project-card:hover img { transform: scale(1.08); }
                    .project-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 1.25rem;
                        color: #fff;
                        background: linear-gradient(to top, rgba(0,0,0,0.85), rgba(0,0,0,0.15) 60%, transparent);
                        opacity: 0;
                        transition: opacity 0.5s;
                    }
                    .project-card:hover .project-overlay { opacity: 1; }
                    .project-overlay .project-category {
                        align-self: flex-start;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        background: #1e6fd9;
                        font-size: 0.75rem;
                        margin-bottom: 0.5rem;
                    }
                    .project-overlay h3 { margin: 0 0 0.4rem; font-size: 1.2rem; }
                    .project-overlay p {
                        margin: 0 0 0.5rem;
                        font-size: 0.85rem;
                        opacity: 0.9;
                    }
                    .project-meta {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.75rem;
                        opacity: 0.75;
                    }
                "#}
            </style>
            <div class="projects-inner">
                <div class="projects-heading">
                    <h2>{"Our Past Projects"}</h2>
                    <p>
                        {"Take a look at some of the quality work we've completed for our \
                          satisfied clients across Chandigarh and surrounding areas"}
                    </p>
                    <div class="category-bar">
                        {
                            CATEGORIES.iter().map(|&category| {
                                let active = filter.active_category() == category;
                                let onclick = {
                                    let filter = filter.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = (*filter).clone();
                                        next.select_category(category);
                                        filter.set(next);
                                    })
                                };
                                html! {
                                    <button
                                        class={classes!("category-badge", active.then_some("active"))}
                                        {onclick}
                                    >
                                        {category}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="projects-grid">
                    {
                        visible.iter().enumerate().map(|(index, project)| {
                            let delay = format!("transition-delay: {}ms;", index * STAGGER_STEP_MS);
                            html! {
                                <div
                                    key={project.id}
                                    class={classes!("project-card", (*cards_in).then_some("entered"))}
                                    style={delay}
                                >
                                    <img src={project.image} alt={project.title} loading="lazy" />
                                    <div class="project-overlay">
                                        <span class="project-category">{project.category}</span>
                                        <h3>{project.title}</h3>
                                        <p>{project.description}</p>
                                        <div class="project-meta">
                                            <span>{project.location}</span>
                                            <span>{project.year}</span>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

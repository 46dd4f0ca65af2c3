use yew::prelude::*;

use crate::catalog::Testimonial;

const MAX_STARS: u8 = 5;

/// Uppercase initials used when a client has no avatar image.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

fn star_row(rating: u8) -> Html {
    (0..MAX_STARS)
        .map(|i| {
            let class = if i < rating { "star filled" } else { "star" };
            html! { <span class={class}>{"★"}</span> }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;

    html! {
        <div class="testimonial-card">
            <style>
                {r#"
                    .testimonial-card {
                        height: 100%;
                        box-sizing: border-box;
                        background: #fff;
                        border-radius: 16px;
                        padding: 1.5rem;
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .testimonial-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 10px 28px rgba(0, 0, 0, 0.12);
                    }
                    .testimonial-header {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .testimonial-avatar {
                        width: 48px;
                        height: 48px;
                        border-radius: 999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-weight: bold;
                        background: linear-gradient(135deg, #1e6fd9, #e67e22);
                        flex-shrink: 0;
                    }
                    .testimonial-name {
                        margin: 0;
                        font-size: 1rem;
                        color: #1a1a1a;
                    }
                    .testimonial-location {
                        margin: 0;
                        font-size: 0.85rem;
                        color: #888;
                    }
                    .testimonial-stars { margin-bottom: 0.75rem; }
                    .star { color: #ddd; font-size: 1.1rem; }
                    .star.filled { color: #f1c40f; }
                    .testimonial-comment {
                        margin: 0;
                        font-style: italic;
                        color: #555;
                        font-size: 0.95rem;
                        line-height: 1.5;
                    }
                "#}
            </style>
            <div class="testimonial-header">
                <div class="testimonial-avatar">{initials(t.name)}</div>
                <div>
                    <h4 class="testimonial-name">{t.name}</h4>
                    <p class="testimonial-location">{t.location}</p>
                </div>
            </div>
            <div class="testimonial-stars">{star_row(t.rating)}</div>
            <p class="testimonial-comment">{format!("\"{}\"", t.comment)}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn initials_take_the_first_letter_of_each_word() {
        assert_eq!(initials("Rajesh Kumar"), "RK");
        assert_eq!(initials("Priya"), "P");
    }

    #[test]
    fn initials_are_uppercased_and_skip_extra_whitespace() {
        assert_eq!(initials("  amit   singh "), "AS");
        assert_eq!(initials(""), "");
    }
}

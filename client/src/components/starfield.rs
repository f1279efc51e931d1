//! Decorative login backdrop: a static starfield plus falling warehouse
//! icons.
//!
//! Which layers run comes from [`AppConfig::rain_mode`]. All sizing and
//! timing formulas live in [`crate::util::sky`]; this component only samples
//! randomness and manages DOM lifecycles.

use leptos::prelude::*;

use crate::config::AppConfig;

#[cfg(feature = "hydrate")]
use std::cell::Cell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::util::sky;

/// One static star, positioned in viewport percentages.
#[derive(Debug, Clone, PartialEq)]
struct Star {
    left_pct: f64,
    top_pct: f64,
    size: f64,
    near: bool,
    twinkle_delay: f64,
}

/// One falling icon currently in flight.
#[derive(Debug, Clone, PartialEq)]
struct IconDrop {
    id: u64,
    src: String,
    left_pct: f64,
    size: f64,
    opacity: f64,
    drift: f64,
    rotation: f64,
    duration: f64,
}

/// Login backdrop layers. Renders nothing on the server.
#[component]
pub fn Starfield() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let stars = RwSignal::new(Vec::<Star>::new());
    let drops = RwSignal::new(Vec::<IconDrop>::new());

    #[cfg(feature = "hydrate")]
    {
        let mode = config.rain_mode;
        let icons = Rc::new(
            config
                .icon_files
                .iter()
                .map(|file| format!("/icons/{file}"))
                .collect::<Vec<_>>(),
        );

        Effect::new(move || {
            if mode.has_stars() && stars.get_untracked().is_empty() {
                stars.set(generate_stars());
            }
        });

        if mode.has_icons() && !icons.is_empty() {
            schedule_drop(drops, icons, Rc::new(Cell::new(0)));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &config;

    view! {
        <div class="sky" aria-hidden="true">
            <For
                each=move || stars.get().into_iter().enumerate()
                key=|(idx, _)| *idx
                children=|(_, star)| {
                    let class = if star.near { "sky__star sky__star--near" } else { "sky__star" };
                    let style = format!(
                        "left:{:.2}%;top:{:.2}%;width:{:.2}px;height:{:.2}px;animation-delay:{:.2}s",
                        star.left_pct, star.top_pct, star.size, star.size, star.twinkle_delay,
                    );
                    view! { <span class=class style=style></span> }
                }
            />
            <For
                each=move || drops.get()
                key=|drop| drop.id
                children=|drop| {
                    let style = format!(
                        "left:{:.2}%;width:{:.1}px;opacity:{:.2};animation-duration:{:.2}s;--drift:{:.1}px;--rot:{:.0}deg",
                        drop.left_pct, drop.size, drop.opacity, drop.duration, drop.drift, drop.rotation,
                    );
                    view! { <img class="sky__icon" src=drop.src style=style/> }
                }
            />
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn generate_stars() -> Vec<Star> {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    (0..sky::star_count(width))
        .map(|_| {
            let r = js_sys::Math::random();
            let near = sky::star_is_near(r);
            Star {
                left_pct: js_sys::Math::random() * 100.0,
                top_pct: js_sys::Math::random() * 100.0,
                size: sky::star_size(r, near),
                near,
                twinkle_delay: js_sys::Math::random() * 4.0,
            }
        })
        .collect()
}

/// Spawn one icon after a random delay, arm its removal, then reschedule.
#[cfg(feature = "hydrate")]
fn schedule_drop(drops: RwSignal<Vec<IconDrop>>, icons: Rc<Vec<String>>, next_id: Rc<Cell<u64>>) {
    let delay = sky::icon_spawn_delay_ms(js_sys::Math::random());
    gloo_timers::callback::Timeout::new(delay, move || {
        let id = next_id.get();
        next_id.set(id + 1);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let index = (js_sys::Math::random() * icons.len() as f64).floor() as usize % icons.len();
        let r = js_sys::Math::random();
        drops.update(|list| {
            list.push(IconDrop {
                id,
                src: icons[index].clone(),
                left_pct: js_sys::Math::random() * 100.0,
                size: sky::icon_size(r),
                opacity: sky::icon_opacity(r),
                drift: sky::icon_drift(js_sys::Math::random()),
                rotation: sky::icon_rotation(js_sys::Math::random()),
                duration: sky::icon_duration_secs(js_sys::Math::random()),
            });
        });

        gloo_timers::callback::Timeout::new(sky::ICON_LIFETIME_MS, move || {
            drops.update(|list| list.retain(|drop| drop.id != id));
        })
        .forget();

        schedule_drop(drops, icons, next_id);
    })
    .forget();
}

use leptos::prelude::*;

use crate::components::Icon;
use crate::site::{
    HERO_BACKGROUND_IMAGE, HERO_CERTIFICATE_IMAGE, HERO_HEADLINE, HERO_SUBTEXT, STAT_ITEMS,
};
use crate::types::{LabelPart, StatItem};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="h-fit">
            <div class="absolute inset-0">
                <img src=HERO_BACKGROUND_IMAGE alt="" class="h-[55%] w-full" />
            </div>

            <div class="container max-w-6xl mx-auto relative flex flex-col gap-32">
                <div class="grid grid-cols-2 items-center gap-12">
                    <div class="col-span-1">
                        <h1 class="text-white text-6xl font-black leading-tight">{HERO_HEADLINE}</h1>
                        <p class="text-white font-bold text-xl mt-4">{HERO_SUBTEXT}</p>
                    </div>

                    <div class="col-span-1 flex justify-center">
                        <img src=HERO_CERTIFICATE_IMAGE alt="Hero Certificate" class="w-4/5" />
                    </div>
                </div>

                <ul class="flex items-center justify-between relative">
                    {STAT_ITEMS.iter().map(|item| view! { <StatEntry item=*item /> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}

/// One metric: icon, big label (with superscripts), description.
#[component]
pub fn StatEntry(item: StatItem) -> impl IntoView {
    view! {
        <li class="flex flex-col items-center gap-2" data-stat=item.id.to_string()>
            <Icon path=item.icon class="text-5xl text-white" />
            <span class="text-6xl text-white font-extrabold">
                {item.label.iter().map(label_part).collect_view()}
            </span>
            <span class="text-xl text-white font-bold">{item.description}</span>
        </li>
    }
}

fn label_part(part: &LabelPart) -> AnyView {
    match *part {
        LabelPart::Text(text) => text.into_any(),
        LabelPart::Superscript(text) => view! { <sup>{text}</sup> }.into_any(),
    }
}

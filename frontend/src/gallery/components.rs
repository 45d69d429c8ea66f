use crate::env_variable_utils::GALLERY_ENV;
use crate::gallery::api::load_videos;
use crate::gallery::{gallery_view, next_visible_count, sort_by_views, PAGE_SIZE};
use crate::models::VideoRecord;
use crate::utils::{format_iso8601_date, format_number, max_res_thumbnail_url, watch_url};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoProps {
    pub video: VideoRecord,
}

fn play_icon(size_class: &'static str) -> Html {
    html! {
        <svg
            class={classes!(size_class, "text-white")}
            fill="currentColor"
            viewBox="0 0 84 84"
            xmlns="http://www.w3.org/2000/svg"
        >
            <circle cx="42" cy="42" r="42" fill="currentColor" opacity="0.5"/>
            <polygon points="33,25 33,59 59,42" fill="white"/>
        </svg>
    }
}

#[function_component(FeaturedVideo)]
pub fn featured_video(props: &VideoProps) -> Html {
    let video = &props.video;

    html! {
        <div class="mb-8 relative bg-white rounded-lg shadow-xl overflow-hidden transform hover:scale-105 hover:shadow-2xl transition duration-300 ease-in-out group">
            <a href={watch_url(&video.video_id)} target="_blank" rel="noreferrer">
                <img
                    src={max_res_thumbnail_url(&video.video_id)}
                    alt={video.title.clone()}
                    class="w-full h-96 sm:h-[500px] object-cover rounded-t-lg"
                />

                <div class="absolute inset-0 bg-black/20 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    { play_icon("w-20 h-20") }
                </div>

                <div class="absolute top-4 left-4 flex flex-col gap-2">
                    <span class="bg-blue-600 text-white text-xs font-semibold px-3 py-1 rounded-full shadow-lg">
                        { &video.channel_name }
                    </span>
                    <span class="bg-purple-600 text-white text-xs font-semibold px-3 py-1 rounded-full shadow-lg">
                        { format!("{} views", format_number(video.views as i64)) }
                    </span>
                </div>

                <div class="absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/80 to-transparent p-4">
                    <h2 class="text-white text-lg sm:text-2xl font-bold">{ &video.title }</h2>
                    <p class="text-gray-300 text-sm">{ format_iso8601_date(&video.published_at) }</p>
                </div>
            </a>
        </div>
    }
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoProps) -> Html {
    let video = &props.video;

    html! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden transform hover:scale-105 hover:shadow-xl transition duration-300 ease-in-out relative group">
            <a href={watch_url(&video.video_id)} target="_blank" rel="noreferrer">
                <img src={video.thumbnail.clone()} alt={video.title.clone()} class="w-full h-48 object-cover" />

                <div class="absolute inset-0 bg-black/30 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    { play_icon("w-16 h-16") }
                </div>
                <div class="absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/70 to-transparent p-2 text-white opacity-0 group-hover:opacity-100 transition-opacity duration-300 text-xs">
                    <p>{ &video.channel_name }</p>
                    <p>{ format!("{} views • {}", format_number(video.views as i64), format_iso8601_date(&video.published_at)) }</p>
                </div>
            </a>
            <div class="p-4">
                <h3 class="font-semibold text-lg mb-1">{ &video.title }</h3>
            </div>
        </div>
    }
}

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    let videos = use_state(Vec::<VideoRecord>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let visible_count = use_state(|| PAGE_SIZE);

    // Load the artifact once on mount
    {
        let videos = videos.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match load_videos().await {
                    Ok(mut list) => {
                        sort_by_views(&mut list);
                        videos.set(list);
                    }
                    Err(e) => {
                        let message = format!("Error fetching videos: {}", e);
                        web_sys::console::error_1(&message.clone().into());
                        error_message.set(Some(message));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <h2 class="text-center mt-10 text-xl">{"Loading podcasts..."}</h2>
        };
    }

    let on_load_more = {
        let visible_count = visible_count.clone();
        Callback::from(move |_: MouseEvent| visible_count.set(next_visible_count(*visible_count)))
    };

    let view = gallery_view(&videos, *visible_count);

    html! {
        <div class="p-6 font-sans bg-gray-50 min-h-screen">
            <h1 class="text-3xl font-bold mb-6 text-center">{ format!("🎙️ {}", GALLERY_ENV.app_name) }</h1>

            {
                if let Some(msg) = &*error_message {
                    html! {
                        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                            { msg }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if let Some(featured) = view.featured {
                    html! { <FeaturedVideo video={featured.clone()} /> }
                } else {
                    html! {}
                }
            }

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                { for view.grid.iter().map(|video| html! {
                    <VideoCard video={video.clone()} />
                })}
            </div>

            {
                if view.has_more {
                    html! {
                        <div class="text-center mt-6">
                            <button
                                class="px-6 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 transition"
                                onclick={on_load_more}
                            >
                                {"Load More"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

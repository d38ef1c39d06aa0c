#![cfg(target_arch = "wasm32")]

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use toolscope::components::star_rating::StarRating;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_host() -> web_sys::Element {
    let document = leptos::document();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

#[wasm_bindgen_test]
fn interactive_selector_only_emits_ratings_between_one_and_five() {
    let host = mount_host();
    let selected = create_rw_signal(0u8);

    mount_to(host.clone().unchecked_into(), move || {
        view! {
            <StarRating
                rating=Signal::derive(move || selected.get())
                on_change=Callback::new(move |star| selected.set(star))
            />
        }
    });

    let stars = host.query_selector_all("button.star").unwrap();
    assert_eq!(stars.length(), 5);

    for i in 0..stars.length() {
        let button: web_sys::HtmlElement = stars.get(i).unwrap().unchecked_into();
        button.click();
        let emitted = selected.get_untracked();
        assert_eq!(u32::from(emitted), i + 1);
        assert!((1..=5).contains(&emitted));
    }
}

#[wasm_bindgen_test]
fn static_display_fills_stars_up_to_the_rating() {
    let host = mount_host();

    mount_to(host.clone().unchecked_into(), || {
        view! { <StarRating rating=3u8/> }
    });

    // no on_change: plain spans, nothing clickable
    assert_eq!(host.query_selector_all("button.star").unwrap().length(), 0);
    assert_eq!(host.query_selector_all(".star").unwrap().length(), 5);
    assert_eq!(host.query_selector_all(".star.filled").unwrap().length(), 3);
}

use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::signal_vec::SignalVecExt;

use shared::listing::PageCard;

use crate::constants::{PROP_DISABLED, TAG_BUTTON, TAG_DIV};
use crate::loader::load_pages;
use crate::state::App;
use crate::utils::format_date_time;

fn css_class(label: &str) -> String {
    format!("app-pages__{label}")
}

pub fn app_pages(app: Rc<App>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .attr("id", "cards_page")
                .class(css_class("cards"))
                .children_signal_vec(app.cards.signal_vec_cloned().map(page_card))
            }),
            html!(TAG_BUTTON, {
                .attr("id", "load-next")
                .class(css_class("button"))
                .text("Load more")
                .prop_signal(PROP_DISABLED, app.pages.signal_ref(|state| state.is_blocked()))
                .event({
                    let app = app.clone();
                    move |_: events::Click| load_pages(&app)
                })
            }),
        ])
    })
}

fn page_card(card: PageCard) -> Dom {
    html!(TAG_DIV, {
        .class("card_page")
        .attr("color_code", &card.color.to_string())
        .children([
            html!(TAG_DIV, {
                .class("card_page_td")
                .children([
                    html!("h4", {
                        .text(&card.title)
                    }),
                    html!("p", {
                        .style("color", "gray")
                        .text(&format_date_time(&card.created))
                    }),
                ])
            }),
            html!(TAG_DIV, {
                .class("card_page_bv")
                .children([
                    html!("a", {
                        .attr("href", &format!("/{}", card.path))
                        .child(html!(TAG_DIV, {
                            .class("buttons")
                            .child(html!(TAG_BUTTON, {
                                .text("Go Page")
                            }))
                        }))
                    }),
                    html!("p", {
                        .style("color", "gray")
                        .text(&format!("views: {}", card.views))
                    }),
                ])
            }),
        ])
    })
}

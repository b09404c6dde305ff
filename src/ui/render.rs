use foodmatch::model::Model;
use foodmatch::Route;
use ratatui::Frame;

use super::{auth, chat, feed, header, layout, legend, nav_bar, profile, search, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, model: &Model) {
    let size = f.area();
    let route = model.route;
    let layout_info = layout::calculate_layout(size, route != Route::Auth);

    header::render_header(f, layout_info.header_area, route, &model.session);

    let content = layout_info.content_area;
    match route {
        Route::Auth => auth::render_auth(f, content, &model.auth),
        Route::Feed => feed::render_feed(f, content, &model.feed),
        Route::Search => search::render_search(f, content, &model.search),
        Route::Chat => chat::render_chat(f, content, &model.chat),
        Route::Profile => profile::render_profile(f, content, &model.profile),
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        route,
        model.ui.vim_mode,
        model.is_typing(),
    );

    if let Some(nav_area) = layout_info.nav_area {
        nav_bar::render_nav_bar(f, nav_area, route);
    }

    // Toast last so it sits on top of everything
    if let Some((message, _)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}

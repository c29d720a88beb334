use crate::router::Route;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::views::{render_confirm_delete, render_detail, render_form, render_list};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let route = app.route();

    let header_widget = Header::new(route, app.base_url()).loading(app.is_busy(), app.tick());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    match route {
        Route::List => render_list(
            frame,
            body,
            app.state(),
            app.selection(),
            app.flash(),
            app.tick(),
        ),
        Route::Show(id) => render_detail(frame, body, app.state(), id, app.tick()),
        Route::Create | Route::Edit(_) => render_form(frame, body, app.form(), app.state(), app.tick()),
    }

    let footer_widget = Footer::new(route, app.confirm_delete().is_some());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(id) = app.confirm_delete() {
        let name = app
            .state()
            .find(id)
            .map(|item| item.name.as_str())
            .unwrap_or_default();
        render_confirm_delete(frame, body, name);
    }
}

//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Ctrl+C / Ctrl+Q quit from anywhere
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            model.set_should_quit(true).await;
            return Ok(());
        }

        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Esc dismisses an error before doing anything else
        if key.code == KeyCode::Esc && model.has_error().await {
            model.clear_error().await;
            return Ok(());
        }

        if key.code == KeyCode::F(1) {
            model.toggle_help_popup().await;
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        match ui_state.active_section {
            ActiveSection::Search => match key.code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter | KeyCode::Down => {
                    model.set_active_section(ActiveSection::Results).await;
                }
                KeyCode::Esc => {
                    if model.clear_search().await {
                        drop(model);
                        self.on_query_changed(String::new()).await;
                    }
                }
                KeyCode::Backspace => {
                    if let Some(query) = model.backspace_search().await {
                        drop(model);
                        self.on_query_changed(query).await;
                    }
                }
                KeyCode::Char(c) => {
                    let query = model.append_to_search(c).await;
                    drop(model);
                    self.on_query_changed(query).await;
                }
                _ => {}
            },
            ActiveSection::Results => match key.code {
                KeyCode::Tab => model.cycle_section_forward().await,
                KeyCode::BackTab => model.cycle_section_backward().await,
                KeyCode::Esc | KeyCode::Char('/') => {
                    model.set_active_section(ActiveSection::Search).await;
                }
                KeyCode::Up | KeyCode::Char('k') => model.move_selection_up().await,
                KeyCode::Down | KeyCode::Char('j') => model.move_selection_down().await,
                KeyCode::Home | KeyCode::Char('g') => model.select_first().await,
                KeyCode::End | KeyCode::Char('G') => model.select_last().await,
                KeyCode::Char('?') => model.toggle_help_popup().await,
                KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true).await,
                _ => {}
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::search::SEARCH_DEBOUNCE;
    use crate::controller::test_support::{controller_with, movie, Call, FakeCatalog};
    use crate::model::Listing;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_text(controller: &AppController, text: &str) {
        for c in text.chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_schedules_debounced_search() {
        let (controller, catalog) = controller_with(FakeCatalog::new());

        type_text(&controller, "alien").await;
        assert_eq!(controller.model.lock().await.get_ui_state().await.search_query, "alien");

        tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
        assert_eq!(catalog.calls(), vec![Call::Search("alien".to_string())]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backspace_below_minimum_shows_popular() {
        let (controller, catalog) = controller_with(FakeCatalog::new());

        type_text(&controller, "abc").await;
        controller.handle_key_event(press(KeyCode::Backspace)).await.unwrap();

        tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
        assert_eq!(catalog.calls(), vec![Call::Popular]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_escape_clears_query() {
        let (controller, catalog) = controller_with(FakeCatalog::new());

        type_text(&controller, "heat").await;
        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert_eq!(controller.model.lock().await.get_ui_state().await.search_query, "");

        tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
        assert_eq!(catalog.calls(), vec![Call::Popular]);
    }

    #[tokio::test]
    async fn test_release_events_are_ignored() {
        let (controller, _) = controller_with(FakeCatalog::new());

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        controller.handle_key_event(release).await.unwrap();
        assert_eq!(controller.model.lock().await.get_ui_state().await.search_query, "");
    }

    #[tokio::test]
    async fn test_results_navigation_and_quit() {
        let (controller, catalog) = controller_with(FakeCatalog::new());
        controller
            .model
            .lock()
            .await
            .set_movies(Listing::Popular, vec![movie(1), movie(2), movie(3)])
            .await;

        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char('j'))).await.unwrap();
        controller.handle_key_event(press(KeyCode::End)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Up)).await.unwrap();

        {
            let model = controller.model.lock().await;
            let ui = model.get_ui_state().await;
            assert_eq!(ui.active_section, ActiveSection::Results);
            assert_eq!(ui.selected, 1);
            assert!(!model.should_quit().await);
        }

        // Letters navigate here instead of typing into the query
        controller.handle_key_event(press(KeyCode::Char('q'))).await.unwrap();
        let model = controller.model.lock().await;
        assert!(model.should_quit().await);
        assert_eq!(model.get_ui_state().await.search_query, "");
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn test_escape_dismisses_error_first() {
        let (controller, _) = controller_with(FakeCatalog::new());
        type_text(&controller, "ab").await;
        controller.model.lock().await.set_error("Search failed").await;

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();

        let model = controller.model.lock().await;
        assert!(!model.has_error().await);
        assert_eq!(model.get_ui_state().await.search_query, "ab");
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_while_typing() {
        let (controller, _) = controller_with(FakeCatalog::new());

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        controller.handle_key_event(key).await.unwrap();

        let model = controller.model.lock().await;
        assert!(model.should_quit().await);
        assert_eq!(model.get_ui_state().await.search_query, "");
    }

    #[tokio::test]
    async fn test_help_popup_swallows_keys() {
        let (controller, _) = controller_with(FakeCatalog::new());

        controller.handle_key_event(press(KeyCode::F(1))).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char('z'))).await.unwrap();
        assert!(controller.model.lock().await.is_help_popup_open().await);

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        let model = controller.model.lock().await;
        assert!(!model.is_help_popup_open().await);
        assert_eq!(model.get_ui_state().await.search_query, "");
    }
}

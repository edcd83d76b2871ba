use super::error::ViewError;
use super::view::Lifecycle;

/// Базовый вид страницы. Все остальные виды вызывают его lifecycle первым.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainView;

impl Lifecycle for MainView {
    fn mount(&self) -> Result<(), ViewError> {
        log::info!("MainView mounted");
        Ok(())
    }

    fn unmount(&self) -> Result<(), ViewError> {
        log::info!("MainView unmounted");
        Ok(())
    }
}

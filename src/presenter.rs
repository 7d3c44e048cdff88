//! Presenter side of the main window
//!
//! The window only knows the `MainWindowPresenter` trait and the presenter
//! only knows the `MainWindowView` trait, so neither depends on egui types
//! of the other. `EditorPresenter` is the implementation the app runs with.

use crate::model::{GameObjectRepository, Planet, TradeRoute};
use crate::ui::galactic_plot::GalacticPlot;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, info};

/// Calls a presenter can make on the main window
pub trait MainWindowView {
    fn add_planets(&mut self, names: &[String]);
    fn add_trade_routes(&mut self, names: &[String]);
    /// Create a plot, attach it to the layout and hand it back for filling
    fn make_galactic_plot(&mut self) -> &mut GalacticPlot;
    fn galactic_plot(&mut self) -> Option<&mut GalacticPlot>;
}

/// Calls the main window makes on its presenter
pub trait MainWindowPresenter {
    /// Called once after the window is built
    fn attach(&mut self, view: &mut dyn MainWindowView);

    fn on_planet_checked(&mut self, view: &mut dyn MainWindowView, row: usize, checked: bool);

    fn on_trade_route_checked(&mut self, view: &mut dyn MainWindowView, row: usize, checked: bool);

    fn on_open_file(&mut self, path: &Path) {
        info!(path = %path.display(), "Open requested");
    }

    fn on_save_file(&mut self, path: &Path) {
        info!(path = %path.display(), "Save requested");
    }

    fn on_data_folder_selected(&mut self, path: &Path) {
        info!(path = %path.display(), "Data folder selected");
    }
}

/// Keeps the checked planets and trade routes and mirrors them on the map
pub struct EditorPresenter {
    repository: Rc<RefCell<GameObjectRepository>>,
    checked_planets: BTreeSet<usize>,
    checked_trade_routes: BTreeSet<usize>,
    data_folder: Option<PathBuf>,
    last_file: Option<PathBuf>,
}

impl EditorPresenter {
    pub fn new(repository: Rc<RefCell<GameObjectRepository>>) -> Self {
        Self {
            repository,
            checked_planets: BTreeSet::new(),
            checked_trade_routes: BTreeSet::new(),
            data_folder: None,
            last_file: None,
        }
    }

    pub fn with_data_folder(mut self, folder: Option<PathBuf>) -> Self {
        self.data_folder = folder;
        self
    }

    pub fn repository(&self) -> &Rc<RefCell<GameObjectRepository>> {
        &self.repository
    }

    pub fn data_folder(&self) -> Option<&Path> {
        self.data_folder.as_deref()
    }

    pub fn last_file(&self) -> Option<&Path> {
        self.last_file.as_deref()
    }

    #[cfg(test)]
    pub fn checked_planets(&self) -> impl Iterator<Item = usize> + '_ {
        self.checked_planets.iter().copied()
    }

    #[cfg(test)]
    pub fn checked_trade_routes(&self) -> impl Iterator<Item = usize> + '_ {
        self.checked_trade_routes.iter().copied()
    }

    /// Store a route made in the trade route dialog and list it
    pub fn add_trade_route(&mut self, view: &mut dyn MainWindowView, route: TradeRoute) {
        let name = route.name.clone();
        self.repository.borrow_mut().add_trade_route(route);
        view.add_trade_routes(&[name]);
    }

    fn replot(&self, view: &mut dyn MainWindowView) {
        let Some(plot) = view.galactic_plot() else {
            return;
        };
        let repo = self.repository.borrow();
        let planets: Vec<Planet> = self
            .checked_planets
            .iter()
            .filter_map(|&i| repo.planets().get(i).cloned())
            .collect();
        let routes: Vec<TradeRoute> = self
            .checked_trade_routes
            .iter()
            .filter_map(|&i| repo.trade_routes().get(i).cloned())
            .collect();
        plot.plot(&planets, &routes);
        debug!(planets = planets.len(), routes = routes.len(), "Galactic plot updated");
    }
}

impl MainWindowPresenter for EditorPresenter {
    fn attach(&mut self, view: &mut dyn MainWindowView) {
        {
            let repo = self.repository.borrow();
            view.add_planets(&repo.planet_names());
            view.add_trade_routes(&repo.trade_route_names());
        }
        view.make_galactic_plot();
        self.replot(view);
    }

    fn on_planet_checked(&mut self, view: &mut dyn MainWindowView, row: usize, checked: bool) {
        if checked {
            self.checked_planets.insert(row);
        } else {
            self.checked_planets.remove(&row);
        }
        self.replot(view);
    }

    fn on_trade_route_checked(&mut self, view: &mut dyn MainWindowView, row: usize, checked: bool) {
        if checked {
            self.checked_trade_routes.insert(row);
        } else {
            self.checked_trade_routes.remove(&row);
        }
        self.replot(view);
    }

    fn on_open_file(&mut self, path: &Path) {
        info!(path = %path.display(), "Galactic Conquest file chosen");
        self.last_file = Some(path.to_path_buf());
    }

    fn on_data_folder_selected(&mut self, path: &Path) {
        info!(path = %path.display(), "Data folder set");
        self.data_folder = Some(path.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingView {
        planets: Vec<String>,
        trade_routes: Vec<String>,
        plot: Option<GalacticPlot>,
    }

    impl MainWindowView for RecordingView {
        fn add_planets(&mut self, names: &[String]) {
            self.planets.extend_from_slice(names);
        }

        fn add_trade_routes(&mut self, names: &[String]) {
            self.trade_routes.extend_from_slice(names);
        }

        fn make_galactic_plot(&mut self) -> &mut GalacticPlot {
            self.plot.insert(GalacticPlot::new())
        }

        fn galactic_plot(&mut self) -> Option<&mut GalacticPlot> {
            self.plot.as_mut()
        }
    }

    fn attached() -> (EditorPresenter, RecordingView) {
        let repo = Rc::new(RefCell::new(GameObjectRepository::demo()));
        let mut presenter = EditorPresenter::new(repo);
        let mut view = RecordingView::default();
        presenter.attach(&mut view);
        (presenter, view)
    }

    #[test]
    fn attach_pushes_repository_names_and_creates_plot() {
        let (presenter, view) = attached();
        let repo = presenter.repository().borrow();
        assert_eq!(view.planets, repo.planet_names());
        assert_eq!(view.trade_routes, repo.trade_route_names());
        let plot = view.plot.as_ref().unwrap();
        assert_eq!(plot.planet_count(), 0);
    }

    #[test]
    fn checked_planets_and_routes_are_plotted() {
        let (mut presenter, mut view) = attached();
        // Aldara, Brisk and the route between them
        presenter.on_planet_checked(&mut view, 0, true);
        presenter.on_planet_checked(&mut view, 1, true);
        presenter.on_trade_route_checked(&mut view, 0, true);
        // Aldara_Cygnar has no plotted far end
        presenter.on_trade_route_checked(&mut view, 1, true);

        let plot = view.plot.as_ref().unwrap();
        assert_eq!(plot.planet_count(), 2);
        assert_eq!(plot.route_count(), 1);

        presenter.on_planet_checked(&mut view, 1, false);
        let plot = view.plot.as_ref().unwrap();
        assert_eq!(plot.planet_count(), 1);
        assert_eq!(plot.route_count(), 0);
        assert_eq!(presenter.checked_planets().collect::<Vec<_>>(), [0]);
        assert_eq!(presenter.checked_trade_routes().collect::<Vec<_>>(), [0, 1]);
    }

    #[test]
    fn repeated_check_is_idempotent() {
        let (mut presenter, mut view) = attached();
        presenter.on_planet_checked(&mut view, 2, true);
        presenter.on_planet_checked(&mut view, 2, true);
        assert_eq!(presenter.checked_planets().count(), 1);
    }

    #[test]
    fn out_of_range_rows_are_not_plotted() {
        let (mut presenter, mut view) = attached();
        presenter.on_planet_checked(&mut view, 99, true);
        assert_eq!(view.plot.as_ref().unwrap().planet_count(), 0);
    }

    #[test]
    fn created_route_is_stored_and_listed() {
        let (mut presenter, mut view) = attached();
        let before = view.trade_routes.len();
        presenter.add_trade_route(&mut view, TradeRoute::new("Cygnar_Eloa", "Cygnar", "Eloa"));
        assert_eq!(view.trade_routes.len(), before + 1);
        assert_eq!(view.trade_routes.last().map(String::as_str), Some("Cygnar_Eloa"));
        assert_eq!(presenter.repository().borrow().trade_routes().len(), before + 1);
    }

    #[test]
    fn paths_are_remembered() {
        let (mut presenter, _) = attached();
        presenter.on_data_folder_selected(Path::new("/games/Data"));
        presenter.on_open_file(Path::new("/games/Data/XML/campaign.xml"));
        presenter.on_save_file(Path::new("/tmp/out.xml"));
        assert_eq!(presenter.data_folder(), Some(Path::new("/games/Data")));
        assert_eq!(presenter.last_file(), Some(Path::new("/games/Data/XML/campaign.xml")));
    }
}

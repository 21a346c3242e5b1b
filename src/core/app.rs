use chrono::Local;
use cosmic::Task;
use cosmic::iced::keyboard;
use cosmic::iced::{Length, Size};
use cosmic::iced_widget::{canvas, column, container, row};
use cosmic::{
    app,
    iced_futures::{Subscription, event::listen_with},
};

use crate::config::WhiteboardConfig;
use crate::dialogs::{self, FileFilter};
use crate::domain::{Pen, PenWidth};
use crate::drawing::handlers::{handle_draw_msg, handle_edit_msg};
use crate::fl;
use crate::notes::{self, NotesState};
use crate::render;
use crate::session::messages::{self, ExportMsg, NotesMsg, PenMsg};
use crate::session::shortcuts::handle_key_event;
use crate::session::state::{DrawingSession, UiState};
use crate::session::status::Status;
use crate::widget::pen_handlers::{handle_pen_msg, save_pen_config};
use crate::widget::{Board, notes_editor, pen_popup, status_bar, toolbar};

pub(crate) fn run() -> cosmic::iced::Result {
    let settings = cosmic::app::Settings::default().size(Size::new(1200.0, 600.0));
    cosmic::app::run::<App>(settings, ())
}

pub struct App {
    pub core: app::Core,
    pub config: WhiteboardConfig,
    /// Pen and stroke history
    pub session: DrawingSession,
    /// Committed stroke geometry, cleared when history changes
    pub board_cache: canvas::Cache,
    pub notes: NotesState,
    pub ui: UiState,
    /// Result of the most recent action
    pub status: Status,
}

#[derive(Debug, Clone)]
pub enum Msg {
    Whiteboard(messages::Msg),
    Keyboard(keyboard::Event),
}

impl cosmic::Application for App {
    type Executor = cosmic::executor::Default;

    type Flags = ();

    type Message = Msg;

    const APP_ID: &'static str = "io.github.nullbyte.whiteboard";

    fn core(&self) -> &app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut app::Core {
        &mut self.core
    }

    fn init(
        core: app::Core,
        _flags: Self::Flags,
    ) -> (Self, cosmic::iced::Task<cosmic::Action<Self::Message>>) {
        let config = WhiteboardConfig::load();
        let pen = Pen {
            color: config.pen_color,
            width: PenWidth::new(config.pen_width),
        };
        log::info!("Starting with pen {} width {}", pen.color, pen.width.get());

        let mut app = Self {
            core,
            config,
            session: DrawingSession::new(pen),
            board_cache: canvas::Cache::new(),
            notes: NotesState::default(),
            ui: UiState {
                width_slider: pen.width.as_f32(),
                ..UiState::default()
            },
            status: Status::Ready,
        };

        let title = fl!("app-title");
        app.set_header_title(title.clone());
        let task = match app.core.main_window_id() {
            Some(id) => app.set_window_title(title, id),
            None => Task::none(),
        };
        (app, task)
    }

    fn view(&self) -> cosmic::Element<'_, Self::Message> {
        self.view_whiteboard().map(Msg::Whiteboard)
    }

    fn update(
        &mut self,
        message: Self::Message,
    ) -> cosmic::iced::Task<cosmic::Action<Self::Message>> {
        match message {
            Msg::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                if let Some(msg) = handle_key_event(key, modifiers, self.ui.pen_popup_open) {
                    return self.update(Msg::Whiteboard(msg));
                }
                Task::none()
            }
            Msg::Keyboard(_) => Task::none(),
            Msg::Whiteboard(m) => self.update_whiteboard(m).map(cosmic::Action::App),
        }
    }

    fn subscription(&self) -> cosmic::iced_futures::Subscription<Self::Message> {
        Subscription::batch(vec![listen_with(|e, _, _| match e {
            cosmic::iced_core::Event::Keyboard(keyboard_event) => {
                Some(Msg::Keyboard(keyboard_event))
            }
            _ => None,
        })])
    }
}

impl App {
    fn view_whiteboard(&self) -> cosmic::Element<'_, messages::Msg> {
        let spacing = self.core.system_theme().cosmic().spacing;
        let space_s = spacing.space_s;
        let space_xs = spacing.space_xs;

        let toolbar = toolbar::build_toolbar(self.ui.width_slider, space_s, space_xs);

        let board = canvas(Board::new(
            self.session.strokes(),
            self.session.active(),
            &self.board_cache,
            messages::Msg::Draw,
        ))
        .width(Length::FillPortion(2))
        .height(Length::Fill);

        let notes = container(notes_editor::build_notes_editor(
            &self.notes,
            self.config.highlight_color,
            space_xs,
        ))
        .width(Length::FillPortion(1))
        .height(Length::Fill);

        let mut content = column![toolbar].spacing(space_xs);

        if self.ui.pen_popup_open {
            content = content.push(
                container(pen_popup::build_pen_popup(
                    self.session.pen().color,
                    &self.ui.hex_input,
                    &messages::Msg::set_color,
                    |input| messages::Msg::Pen(PenMsg::HexInput(input)),
                    messages::Msg::Pen(PenMsg::HexApply),
                    messages::Msg::close_pen_popup(),
                    space_s,
                    space_xs,
                ))
                .padding([0, space_s]),
            );
        }

        content
            .push(
                row![board, notes]
                    .spacing(space_s)
                    .padding([0, space_s])
                    .height(Length::Fill),
            )
            .push(status_bar::build_status_bar(
                &self.status,
                spacing.space_xxs,
                space_s,
            ))
            .into()
    }

    fn update_whiteboard(&mut self, msg: messages::Msg) -> Task<Msg> {
        match msg {
            messages::Msg::Draw(action) => {
                let status = handle_draw_msg(&mut self.session, action);
                if status == Status::StrokeAdded {
                    self.board_cache.clear();
                }
                self.status = status;
            }
            messages::Msg::Edit(edit) => {
                self.status = handle_edit_msg(&mut self.session, edit);
                self.board_cache.clear();
            }
            messages::Msg::Pen(pen_msg) => {
                let update = handle_pen_msg(&mut self.session, &mut self.ui, pen_msg);
                if update.save_config {
                    save_pen_config(&self.session);
                }
                if let Some(status) = update.status {
                    self.status = status;
                }
            }
            messages::Msg::Notes(notes_msg) => return self.update_notes(notes_msg),
            messages::Msg::Export(export_msg) => return self.update_export(export_msg),
            messages::Msg::DialogClosed => {}
        }
        Task::none()
    }

    fn update_notes(&mut self, msg: NotesMsg) -> Task<Msg> {
        match msg {
            NotesMsg::Edit(action) => self.notes.perform(action),
            NotesMsg::Highlight => self.status = self.notes.highlight_selection(),
            NotesMsg::ClearHighlights => self.status = self.notes.clear_highlights(),
            NotesMsg::Save => {
                return Task::perform(
                    dialogs::pick_save_path(
                        fl!("dialog-save-notes"),
                        notes::save::default_file_name(Local::now()),
                        self.config.save_location.dir(),
                        vec![
                            FileFilter {
                                name: fl!("filter-text-files"),
                                extensions: &["txt"],
                            },
                            FileFilter {
                                name: fl!("filter-all-files"),
                                extensions: &["*"],
                            },
                        ],
                    ),
                    |path| Msg::Whiteboard(messages::Msg::Notes(NotesMsg::SaveTo(path))),
                );
            }
            NotesMsg::SaveTo(None) => self.status = Status::SaveCancelled,
            NotesMsg::SaveTo(Some(path)) => {
                match notes::save::save_notes(&path, &self.notes.text()) {
                    Ok(()) => {
                        log::info!("Saved notes to {}", path.display());
                        self.status = Status::NotesSaved(path);
                        return Task::perform(
                            dialogs::show_info(fl!("dialog-saved-title"), fl!("dialog-saved-body")),
                            |_| Msg::Whiteboard(messages::Msg::DialogClosed),
                        );
                    }
                    Err(err) => {
                        log::error!("Failed to save notes: {:#}", err);
                        self.status = Status::SaveFailed;
                        return Task::perform(
                            dialogs::show_error(
                                fl!("dialog-error-title"),
                                fl!("dialog-save-error", error = format!("{err:#}")),
                            ),
                            |_| Msg::Whiteboard(messages::Msg::DialogClosed),
                        );
                    }
                }
            }
        }
        Task::none()
    }

    fn update_export(&mut self, msg: ExportMsg) -> Task<Msg> {
        match msg {
            ExportMsg::Export => {
                if self.session.is_empty() {
                    self.status = Status::NothingToExport;
                    return Task::none();
                }
                return Task::perform(
                    dialogs::pick_save_path(
                        fl!("dialog-export-board"),
                        render::image::default_file_name(Local::now()),
                        self.config.save_location.dir(),
                        vec![FileFilter {
                            name: fl!("filter-png-images"),
                            extensions: &["png"],
                        }],
                    ),
                    |path| Msg::Whiteboard(messages::Msg::Export(ExportMsg::ExportTo(path))),
                );
            }
            ExportMsg::ExportTo(None) => self.status = Status::ExportCancelled,
            ExportMsg::ExportTo(Some(path)) => {
                // The board may have been cleared while the dialog was open
                let Some(extent) = self.session.extent() else {
                    self.status = Status::NothingToExport;
                    return Task::none();
                };
                match render::image::export_png(&path, self.session.strokes(), extent) {
                    Ok(()) => {
                        log::info!("Exported board to {}", path.display());
                        self.status = Status::BoardExported(path);
                    }
                    Err(err) => {
                        log::error!("Failed to export board: {:#}", err);
                        self.status = Status::ExportFailed;
                        return Task::perform(
                            dialogs::show_error(
                                fl!("dialog-error-title"),
                                fl!("dialog-export-error", error = format!("{err:#}")),
                            ),
                            |_| Msg::Whiteboard(messages::Msg::DialogClosed),
                        );
                    }
                }
            }
        }
        Task::none()
    }
}

use crate::config::Config;
use crate::constants::{
    HINT_ACCORDION, HINT_CARD, HINT_DATE_PICKER, HINT_INPUT, HINT_LOADING, HINT_PAGINATION, TITLE_DATE_PICKER,
    TITLE_INPUT, TITLE_LOGS,
};
use crate::logger::Logger;
use crate::ui::components::common::{create_titled_block, ACCENT};
use crate::ui::components::{
    card_frame_title, loading_frame_title, AccordionComponent, AccordionItem, AccordionState, CardComponent,
    CardPadding, DatePickerComponent, InputComponent, LoadingComponent, ModalComponent, ModalSize,
    PaginationComponent, Skeleton, StatusBar,
};
use crate::ui::core::{Action, Component, Demo, EventType};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

/// What the modal is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalContent {
    Demo,
    Logs,
}

pub struct AppComponent {
    // Demo components
    pagination: PaginationComponent,
    date_picker: DatePickerComponent,
    accordion: AccordionComponent,
    input: InputComponent,
    card: CardComponent,
    loading: LoadingComponent,
    skeleton: Skeleton,
    avatar_skeleton: Skeleton,
    modal: ModalComponent,

    // Gallery state
    active: Demo,
    modal_content: ModalContent,
    demo_modal_size: ModalSize,
    last_action: Option<String>,
    logger: Logger,
    should_quit: bool,
}

fn demo_accordion_items() -> Vec<AccordionItem> {
    vec![
        AccordionItem::new(
            "what",
            "What is widgetkit?",
            "A set of terminal widgets: pagination, date picker, accordion,\ninput, card, modal and loading indicator.",
        ),
        AccordionItem::new(
            "keys",
            "How do I move around?",
            "Tab and Shift+Tab switch demos.\nEach demo lists its own keys in the status bar.",
        ),
        AccordionItem::new(
            "config",
            "Where is the configuration?",
            "./widgetkit.toml, then the user config directory.\nRun with --generate-config to write the defaults.",
        ),
        AccordionItem::new("locked", "Disabled item", "This item cannot be opened.").disabled(),
    ]
}

fn demo_card() -> CardComponent {
    CardComponent::new()
        .with_header("Release notes")
        .with_body([
            "Cards group related content under an optional",
            "header and footer.",
            "",
            "Elevated cards cast a shadow, outlined cards draw a",
            "plain border and filled cards use a background.",
        ])
        .with_footer("Updated today")
        .with_padding(CardPadding::Md)
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let active = Demo::from_name(&config.ui.default_demo).unwrap_or_default();

        Self {
            pagination: PaginationComponent::from_config(&config.pagination),
            date_picker: DatePickerComponent::from_config(&config.date_picker),
            accordion: AccordionComponent::new(demo_accordion_items(), AccordionState::with_expanded(false, ["what"])),
            input: InputComponent::new()
                .with_label("Name")
                .with_placeholder("Your name")
                .with_clearable(true),
            card: demo_card(),
            loading: LoadingComponent::from_config(&config.loading),
            skeleton: Skeleton::new().with_size(Some(32), 2),
            avatar_skeleton: Skeleton::new().with_size(Some(6), 1).with_circle(true),
            modal: ModalComponent::new(),
            active,
            modal_content: ModalContent::Demo,
            demo_modal_size: ModalSize::Sm,
            last_action: None,
            logger,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_demo(&self) -> Demo {
        self.active
    }

    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    pub fn pagination(&self) -> &PaginationComponent {
        &self.pagination
    }

    pub fn date_picker(&self) -> &DatePickerComponent {
        &self.date_picker
    }

    pub fn date_picker_mut(&mut self) -> &mut DatePickerComponent {
        &mut self.date_picker
    }

    pub fn accordion(&self) -> &AccordionComponent {
        &self.accordion
    }

    pub fn input(&self) -> &InputComponent {
        &self.input
    }

    pub fn card(&self) -> &CardComponent {
        &self.card
    }

    pub fn loading(&self) -> &LoadingComponent {
        &self.loading
    }

    pub fn modal(&self) -> &ModalComponent {
        &self.modal
    }

    /// Route a loop event; returns the resulting action after it was applied
    pub fn handle_event(&mut self, event: EventType) -> Action {
        match event {
            EventType::Key(key) => {
                let action = self.handle_key_events(key);
                self.update(action)
            }
            EventType::Tick => {
                self.on_tick();
                Action::None
            }
            EventType::Resize(width, height) => {
                log::debug!("Terminal resized to {}x{}", width, height);
                Action::None
            }
            EventType::Other => Action::None,
        }
    }

    /// Handle keyboard shortcuts that aren't demo-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Tab => Action::SwitchDemo(self.active.next()),
            KeyCode::BackTab => Action::SwitchDemo(self.active.previous()),
            KeyCode::Char('m') => Action::ShowModal,
            KeyCode::Char('L') => Action::ShowLogs,
            _ => Action::None,
        }
    }

    fn active_component(&mut self) -> &mut dyn Component {
        match self.active {
            Demo::Pagination => &mut self.pagination,
            Demo::DatePicker => &mut self.date_picker,
            Demo::Accordion => &mut self.accordion,
            Demo::Input => &mut self.input,
            Demo::Card => &mut self.card,
            Demo::Loading => &mut self.loading,
        }
    }

    /// Gallery-only keys of the active demo
    fn handle_demo_key(&mut self, key: KeyEvent) -> Action {
        match (self.active, key.code) {
            (Demo::Input, KeyCode::Char('p')) => {
                self.input.password = !self.input.password;
                Action::None
            }
            _ => self.active_component().handle_key_events(key),
        }
    }

    /// The name field must not be left empty
    fn validate_input(&mut self) {
        self.input.error = self
            .input
            .value()
            .trim()
            .is_empty()
            .then(|| "Name is required".to_string());
    }

    fn open_demo_modal(&mut self) {
        let size = self.demo_modal_size;
        self.demo_modal_size = size.next();
        self.modal = ModalComponent::new()
            .with_title(format!("Modal ({})", size.name()))
            .with_size(size)
            .with_body([
                "A centered dialog drawn over the gallery.".to_string(),
                String::new(),
                "Each time it opens it uses the next size:".to_string(),
                "sm, md, lg, xl and full.".to_string(),
            ]);
        self.modal_content = ModalContent::Demo;
        self.modal.open();
    }

    fn open_logs_modal(&mut self) {
        let mut logs = self.logger.get_logs();
        if logs.is_empty() {
            logs.push("No log messages yet".to_string());
        }
        self.modal = ModalComponent::new()
            .with_title(TITLE_LOGS.trim())
            .with_size(ModalSize::Lg)
            .with_body(logs);
        self.modal.show_close_button = false;
        self.modal_content = ModalContent::Logs;
        self.modal.open();
    }

    fn demo_hint(&self) -> &'static str {
        match self.active {
            Demo::Pagination => HINT_PAGINATION,
            Demo::DatePicker => HINT_DATE_PICKER,
            Demo::Accordion => HINT_ACCORDION,
            Demo::Input => HINT_INPUT,
            Demo::Card => HINT_CARD,
            Demo::Loading => HINT_LOADING,
        }
    }

    fn render_tabs(&self, f: &mut Frame, rect: Rect) {
        let titles: Vec<Line> = Demo::ALL.iter().map(|demo| Line::from(demo.title())).collect();
        let tabs = Tabs::new(titles)
            .block(create_titled_block(" widgetkit ", Color::Cyan))
            .select(self.active.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, rect);
    }

    fn render_pagination_demo(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(rect);
        self.pagination.render(f, chunks[0]);

        let body = Paragraph::new(format!("Content of page {}", self.pagination.current_page))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(body, chunks[1]);
    }

    fn render_date_picker_demo(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_titled_block(TITLE_DATE_PICKER, Color::Cyan);
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        self.date_picker.render(f, inner);
    }

    fn render_input_demo(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_titled_block(TITLE_INPUT, Color::Cyan);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(inner);
        self.input.render(f, chunks[0]);

        let mode = if self.input.password { "password" } else { "text" };
        let summary = Paragraph::new(format!("Mode: {} • {} chars", mode, self.input.value().chars().count()))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(summary, chunks[1]);
    }

    fn render_card_demo(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_titled_block(card_frame_title(&self.card), Color::Cyan);
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        self.card.render(f, LayoutManager::centered_rect(70, 80, inner));
    }

    fn render_loading_demo(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_titled_block(loading_frame_title(&self.loading), Color::Cyan);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(inner);

        if !self.loading.full_screen {
            self.loading.render(f, chunks[0]);
        }

        let mut inline = vec![Span::styled("Inline: ", Style::default().fg(Color::Gray))];
        inline.extend(self.loading.inline_line().spans);
        f.render_widget(Paragraph::new(Line::from(inline)), chunks[1]);

        self.avatar_skeleton.render(f, chunks[3]);
        self.skeleton.render(f, chunks[4]);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.modal.is_open() {
            return self.modal.handle_key_events(key);
        }

        // An open calendar owns the keyboard until it closes
        if self.active == Demo::DatePicker && self.date_picker.is_open() {
            return self.date_picker.handle_key_events(key);
        }

        // So does an input being edited
        if self.active == Demo::Input && self.input.is_editing() {
            return self.input.handle_key_events(key);
        }

        match self.handle_global_key(key) {
            Action::None => self.handle_demo_key(key),
            action => action,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let action = match action {
            Action::PageChanged(_) => self.pagination.update(action),
            Action::Quit => {
                log::info!("Quitting");
                self.should_quit = true;
                action
            }
            Action::ShowModal => {
                self.open_demo_modal();
                action
            }
            Action::ShowLogs => {
                self.open_logs_modal();
                action
            }
            Action::InputEditing(false) => {
                self.validate_input();
                action
            }
            Action::InputChanged(_) | Action::InputCleared => {
                self.input.error = None;
                action
            }
            Action::SwitchDemo(demo) => {
                self.date_picker.close();
                self.input.stop_editing();
                self.active = demo;
                action
            }
            _ => action,
        };

        if let Some(description) = action.describe() {
            // The log modal's own close is not worth recording
            if !(action == Action::ModalClosed && self.modal_content == ModalContent::Logs) {
                log::info!("{}", description);
                self.last_action = Some(description);
            }
        }

        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (tabs_area, body_area, status_area) = LayoutManager::gallery_layout(rect);

        self.render_tabs(f, tabs_area);

        match self.active {
            Demo::Pagination => self.render_pagination_demo(f, body_area),
            Demo::DatePicker => self.render_date_picker_demo(f, body_area),
            Demo::Accordion => self.accordion.render(f, body_area),
            Demo::Input => self.render_input_demo(f, body_area),
            Demo::Card => self.render_card_demo(f, body_area),
            Demo::Loading => self.render_loading_demo(f, body_area),
        }

        StatusBar::render(f, status_area, self.demo_hint(), self.last_action.as_deref());

        if self.active == Demo::Loading && self.loading.full_screen {
            self.loading.render(f, rect);
        }

        // Modal goes on top of everything
        self.modal.render(f, rect);
    }

    fn on_tick(&mut self) {
        self.loading.on_tick();
        self.skeleton.on_tick();
        self.avatar_skeleton.on_tick();
    }
}

use chrono::NaiveDate;

/// Demos shown by the gallery, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    #[default]
    Pagination,
    DatePicker,
    Accordion,
    Input,
    Card,
    Loading,
}

impl Demo {
    pub const ALL: [Demo; 6] = [
        Demo::Pagination,
        Demo::DatePicker,
        Demo::Accordion,
        Demo::Input,
        Demo::Card,
        Demo::Loading,
    ];

    /// Config key of the demo (`ui.default_demo`)
    pub fn name(self) -> &'static str {
        match self {
            Demo::Pagination => "pagination",
            Demo::DatePicker => "date_picker",
            Demo::Accordion => "accordion",
            Demo::Input => "input",
            Demo::Card => "card",
            Demo::Loading => "loading",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|demo| demo.name() == name)
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Pagination => "Pagination",
            Demo::DatePicker => "Date picker",
            Demo::Accordion => "Accordion",
            Demo::Input => "Input",
            Demo::Card => "Card",
            Demo::Loading => "Loading",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|demo| *demo == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Pagination
    PageChanged(u32),

    // Date picker
    DateSelected(NaiveDate),
    DatePickerToggled(bool),

    // Accordion
    AccordionToggled { id: String, expanded: bool },

    // Input
    InputEditing(bool),
    InputChanged(String),
    InputCleared,

    // Loading
    LoadingToggled(bool),
    LoadingFullScreen(bool),

    // Modal
    ShowModal,
    ShowLogs,
    ModalClosed,

    // Gallery navigation
    SwitchDemo(Demo),

    // App control
    Quit,
    None,
}

impl Action {
    /// Short human readable description for the status bar and logs
    pub fn describe(&self) -> Option<String> {
        match self {
            Action::PageChanged(page) => Some(format!("Page {page} selected")),
            Action::DateSelected(date) => Some(format!("Date {date} selected")),
            Action::DatePickerToggled(true) => Some("Calendar opened".to_string()),
            Action::DatePickerToggled(false) => Some("Calendar closed".to_string()),
            Action::AccordionToggled { id, expanded } => Some(format!(
                "Item '{id}' {}",
                if *expanded { "expanded" } else { "collapsed" }
            )),
            Action::InputEditing(true) => Some("Editing input".to_string()),
            Action::InputEditing(false) => Some("Input left".to_string()),
            // Length only, the value may be a password
            Action::InputChanged(value) => Some(format!("Input changed ({} chars)", value.chars().count())),
            Action::InputCleared => Some("Input cleared".to_string()),
            Action::LoadingToggled(true) => Some("Loading started".to_string()),
            Action::LoadingToggled(false) => Some("Loading stopped".to_string()),
            Action::LoadingFullScreen(true) => Some("Full screen loading shown".to_string()),
            Action::LoadingFullScreen(false) => Some("Full screen loading hidden".to_string()),
            Action::ModalClosed => Some("Modal closed".to_string()),
            Action::SwitchDemo(demo) => Some(format!("{} demo", demo.title())),
            Action::ShowModal | Action::ShowLogs | Action::Quit | Action::None => None,
        }
    }
}

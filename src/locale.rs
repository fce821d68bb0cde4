use chrono::Weekday;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Pl,
}

const EN_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const PL_WEEKDAYS: [&str; 7] = ["Ndz", "Pon", "Wt", "Śr", "Czw", "Pt", "Sob"];

// Chart axis labels, as browsers print them for `weekday: 'short'`.
const PL_CHART_WEEKDAYS: [&str; 7] = ["niedz.", "pon.", "wt.", "śr.", "czw.", "pt.", "sob."];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const PL_MONTHS: [&str; 12] = [
    "Styczeń",
    "Luty",
    "Marzec",
    "Kwiecień",
    "Maj",
    "Czerwiec",
    "Lipiec",
    "Sierpień",
    "Wrzesień",
    "Październik",
    "Listopad",
    "Grudzień",
];

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Self::En),
            "pl" | "pl-pl" => Some(Self::Pl),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pl => "pl",
        }
    }

    /// Calendar header names, Sunday first.
    pub fn weekdays(self) -> [&'static str; 7] {
        match self {
            Self::En => EN_WEEKDAYS,
            Self::Pl => PL_WEEKDAYS,
        }
    }

    pub fn chart_weekday(self, day: Weekday) -> &'static str {
        let names = match self {
            Self::En => &EN_WEEKDAYS,
            Self::Pl => &PL_CHART_WEEKDAYS,
        };
        names[day.num_days_from_sunday() as usize]
    }

    /// `month` is 1-based; out of range yields an empty name.
    pub fn month_name(self, month: u32) -> &'static str {
        let names = match self {
            Self::En => &EN_MONTHS,
            Self::Pl => &PL_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|index| names.get(index as usize))
            .copied()
            .unwrap_or("")
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Self::En => &EN_TEXTS,
            Self::Pl => &PL_TEXTS,
        }
    }
}

/// Every piece of page copy and notice text.
#[derive(Debug)]
pub struct Texts {
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub dashboard_title: &'static str,
    pub log_out: &'static str,
    pub not_found_title: &'static str,
    pub back_home: &'static str,

    pub tab_calendar: &'static str,
    pub tab_habits: &'static str,
    pub tab_statistics: &'static str,

    pub calendar_heading: &'static str,
    pub calendar_subtitle: &'static str,
    pub previous_month: &'static str,
    pub next_month: &'static str,
    pub calendar_empty_heading: &'static str,
    pub calendar_empty_text: &'static str,
    pub done: &'static str,
    pub not_done: &'static str,

    pub habits_heading: &'static str,
    pub habits_subtitle: &'static str,
    pub new_habit: &'static str,
    pub new_habit_placeholder: &'static str,
    pub add_habit: &'static str,
    pub habits_empty_heading: &'static str,
    pub habits_empty_text: &'static str,
    pub of: &'static str,
    pub checkins_done: &'static str,
    pub delete: &'static str,
    pub confirm_delete: &'static str,

    pub stats_heading: &'static str,
    pub stats_subtitle: &'static str,
    pub stats_empty_heading: &'static str,
    pub stats_empty_text: &'static str,
    pub active_habits: &'static str,
    pub completion_rate: &'static str,
    pub current_streak: &'static str,
    pub days: &'static str,
    pub completed_checkins: &'static str,
    pub weekly_heading: &'static str,
    pub trend_heading: &'static str,
    pub performance_heading: &'static str,
    pub distribution_heading: &'static str,
    pub no_chart_data: &'static str,

    pub hero_badge: &'static str,
    pub hero_title: &'static str,
    pub hero_text: &'static str,
    pub hero_cta: &'static str,
    pub features_heading: &'static str,
    pub features: [(&'static str, &'static str); 4],
    pub research_heading: &'static str,
    pub research_subtitle: &'static str,
    pub research_labels: [&'static str; 4],
    pub auth_heading: &'static str,
    pub auth_subtitle: &'static str,
    pub login_heading: &'static str,
    pub register_heading: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub confirm_password: &'static str,
    pub log_in: &'static str,
    pub register: &'static str,

    pub logged_in: &'static str,
    pub account_created: &'static str,
    pub habit_added: &'static str,
    pub habit_deleted: &'static str,
    pub missing_credentials: &'static str,
    pub password_mismatch: &'static str,
    pub blank_habit_name: &'static str,
    pub unknown_habit: &'static str,
    pub bad_date: &'static str,
    pub date_out_of_range: &'static str,
    pub service_unreachable: &'static str,
    pub service_malformed: &'static str,
}

static EN_TEXTS: Texts = Texts {
    app_name: "Habit Tracker",
    tagline: "Build consistency every day.",
    dashboard_title: "Habit Tracker - Dashboard",
    log_out: "Log out",
    not_found_title: "Page not found",
    back_home: "Back to the home page",

    tab_calendar: "Calendar",
    tab_habits: "Habits",
    tab_statistics: "Statistics",

    calendar_heading: "Habit calendar",
    calendar_subtitle: "Track your progress day by day.",
    previous_month: "Previous month",
    next_month: "Next month",
    calendar_empty_heading: "No habits to track yet",
    calendar_empty_text: "Add habits to follow them in the calendar:",
    done: "Done",
    not_done: "Not done",

    habits_heading: "Your habits",
    habits_subtitle: "Add the routines you want to build and drop the ones you are done with.",
    new_habit: "New habit",
    new_habit_placeholder: "e.g. Morning run",
    add_habit: "Add habit",
    habits_empty_heading: "No habits yet",
    habits_empty_text: "Start with one small thing you want to do every day.",
    of: "of",
    checkins_done: "check-ins done",
    delete: "Delete",
    confirm_delete: "Delete this habit?",

    stats_heading: "Statistics and progress",
    stats_subtitle: "See how your routines are going.",
    stats_empty_heading: "Nothing to analyse yet",
    stats_empty_text: "Add habits and start checking them off to see your statistics.",
    active_habits: "Active habits",
    completion_rate: "Completion rate",
    current_streak: "Current streak",
    days: "days",
    completed_checkins: "Completed check-ins",
    weekly_heading: "Last 7 days",
    trend_heading: "30 day trend",
    performance_heading: "Habit performance",
    distribution_heading: "Completed check-ins by habit",
    no_chart_data: "No data yet",

    hero_badge: "A new era of habit building",
    hero_title: "Build consistency. See the results.",
    hero_text: "Plan the routines that matter, tick them off every day and watch your streaks and completion rates grow.",
    hero_cta: "Start for free",
    features_heading: "Everything you need to stay on track",
    features: [
        ("Calendar", "Mark each habit per day in a monthly view."),
        ("Streaks", "Keep the chain going and see how many days in a row you delivered."),
        ("Statistics", "Weekly and monthly charts plus completion rates for every habit."),
        ("Focus", "A clean dashboard without distractions."),
    ],
    research_heading: "Why does it work?",
    research_subtitle: "Research keeps confirming the effect of systematic habit building.",
    research_labels: [
        "goal achievement",
        "better wellbeing",
        "more energy",
        "better work results",
    ],
    auth_heading: "Time for a change",
    auth_subtitle: "Stop starting tomorrow. Log in or create an account.",
    login_heading: "Log in",
    register_heading: "Create an account",
    email: "Email",
    password: "Password",
    confirm_password: "Confirm password",
    log_in: "Log in",
    register: "Register",

    logged_in: "Logged in successfully.",
    account_created: "Account created. You can log in now.",
    habit_added: "Habit added.",
    habit_deleted: "Habit deleted.",
    missing_credentials: "Email and password are required.",
    password_mismatch: "Passwords do not match.",
    blank_habit_name: "Habit name cannot be empty.",
    unknown_habit: "That habit no longer exists.",
    bad_date: "Invalid date.",
    date_out_of_range: "That date is out of range.",
    service_unreachable: "Could not reach the habit service. Please try again.",
    service_malformed: "The habit service sent an unexpected response.",
};

static PL_TEXTS: Texts = Texts {
    app_name: "Habit Tracker",
    tagline: "Buduj systematyczność każdego dnia",
    dashboard_title: "Habit Tracker - Panel",
    log_out: "Wyloguj się",
    not_found_title: "Nie znaleziono strony",
    back_home: "Wróć na stronę główną",

    tab_calendar: "Kalendarz",
    tab_habits: "Nawyki",
    tab_statistics: "Statystyki",

    calendar_heading: "Kalendarz nawyków",
    calendar_subtitle: "Śledź swoje codzienne postępy",
    previous_month: "Poprzedni miesiąc",
    next_month: "Następny miesiąc",
    calendar_empty_heading: "Brak nawyków do śledzenia",
    calendar_empty_text: "Dodaj nawyki, aby śledzić je w kalendarzu:",
    done: "Wykonano",
    not_done: "Nie wykonano",

    habits_heading: "Twoje nawyki",
    habits_subtitle: "Zarządzaj swoimi codziennymi nawykami",
    new_habit: "Dodaj nowy nawyk",
    new_habit_placeholder: "np. Poranny bieg",
    add_habit: "Dodaj nawyk",
    habits_empty_heading: "Brak nawyków",
    habits_empty_text: "Zacznij od jednej małej rzeczy, którą chcesz robić codziennie.",
    of: "z",
    checkins_done: "wykonanych",
    delete: "Usuń",
    confirm_delete: "Usunąć ten nawyk?",

    stats_heading: "Statystyki i postępy",
    stats_subtitle: "Analizuj swoje wyniki i motywuj się do dalszego działania",
    stats_empty_heading: "Brak danych do analizy",
    stats_empty_text: "Dodaj nawyki i zacznij je odhaczać, aby zobaczyć statystyki.",
    active_habits: "Aktywnych nawyków",
    completion_rate: "Skuteczność",
    current_streak: "Seria dni",
    days: "dni",
    completed_checkins: "Wykonane akcje",
    weekly_heading: "Aktywność w tym tygodniu",
    trend_heading: "Trend miesięczny",
    performance_heading: "Skuteczność nawyków",
    distribution_heading: "Rozkład wykonanych nawyków",
    no_chart_data: "Brak danych",

    hero_badge: "Nowa era budowania nawyków",
    hero_title: "Zbuduj systematyczność, która przekłada się na wyniki",
    hero_text: "Codzienne śledzenie działań zwiększa skuteczność, eliminuje prokrastynację i pozwala osiągać cele szybciej. Zamiast czekać na motywację, zbuduj działający system.",
    hero_cta: "Zacznij za darmo",
    features_heading: "Wszystko, czego potrzebujesz, aby utrzymać kurs",
    features: [
        ("Kalendarz", "Odhaczaj każdy nawyk dzień po dniu w widoku miesiąca."),
        ("Serie", "Nie przerywaj łańcucha i zobacz, ile dni z rzędu się udało."),
        ("Statystyki", "Wykresy tygodniowe i miesięczne oraz skuteczność każdego nawyku."),
        ("Skupienie", "Przejrzysty panel bez rozpraszaczy."),
    ],
    research_heading: "Dlaczego to działa?",
    research_subtitle: "Badania naukowe potwierdzają skuteczność systematycznego śledzenia nawyków",
    research_labels: [
        "osiągniętych celów",
        "lepsze samopoczucie",
        "więcej energii",
        "lepsze wyniki w pracy",
    ],
    auth_heading: "Czas na zmiany",
    auth_subtitle: "Nie trać kolejnego dnia na \"zaczynanie od jutra\". Zaloguj się lub załóż konto.",
    login_heading: "Logowanie",
    register_heading: "Rejestracja",
    email: "Email",
    password: "Hasło",
    confirm_password: "Potwierdź hasło",
    log_in: "Zaloguj się",
    register: "Utwórz konto",

    logged_in: "Zalogowano pomyślnie.",
    account_created: "Konto utworzone! Możesz się teraz zalogować.",
    habit_added: "Nawyk został dodany.",
    habit_deleted: "Nawyk został usunięty.",
    missing_credentials: "Podaj email i hasło.",
    password_mismatch: "Hasła nie są identyczne.",
    blank_habit_name: "Nazwa nawyku nie może być pusta.",
    unknown_habit: "Ten nawyk już nie istnieje.",
    bad_date: "Nieprawidłowa data.",
    date_out_of_range: "Ta data jest poza zakresem.",
    service_unreachable: "Nie udało się połączyć z serwisem nawyków. Spróbuj ponownie.",
    service_malformed: "Serwis nawyków zwrócił nieoczekiwaną odpowiedź.",
};

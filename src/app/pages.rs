use serde::Serialize;
use std::fmt::Write as _;

/// Navigation routes. `/signup` is an alias of the registration page at `/`;
/// the landing page listing both tools lives at `/home`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Registration,
    Calculator,
    About,
    Welcome,
    NotFound(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub route: Route,
    pub title: &'static str,
    pub body: Vec<&'static str>,
    pub links: Vec<(&'static str, Route)>,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match normalized {
            "/" | "/signup" => Route::Registration,
            "/home" | "/index" => Route::Home,
            "/calculator" => Route::Calculator,
            "/about" => Route::About,
            "/welcome" => Route::Welcome,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/home",
            Route::Registration => "/",
            Route::Calculator => "/calculator",
            Route::About => "/about",
            Route::Welcome => "/welcome",
            Route::NotFound(path) => path,
        }
    }

    pub fn page(&self) -> Page {
        let (title, body, links): (_, Vec<&'static str>, _) = match self {
            Route::Home => (
                "Code Craft Calculator & Form",
                vec![
                    "Calculator: a fully functional calculator with support for basic operations, percentages, and square functions.",
                    "Form Validation: a responsive registration form with real-time validation for all input fields.",
                ],
                vec![
                    ("Calculator", Route::Calculator),
                    ("Form Validation", Route::Registration),
                    ("About", Route::About),
                ],
            ),
            Route::Registration => (
                "Sign Up",
                vec![
                    "Create a new account with validated information.",
                    "Full Name must be at least 5 characters long",
                    "Email must contain \"@\"",
                    "Phone Number must be 10 digits and not \"1234567890\"",
                    "Password must be at least 8 characters",
                    "Password cannot be \"password\" or contain your name",
                    "Confirm Password must match Password",
                ],
                vec![
                    ("Home", Route::Home),
                    ("Calculator", Route::Calculator),
                    ("About", Route::About),
                ],
            ),
            Route::Calculator => (
                "Calculator",
                vec![
                    "Enter numbers using the number pad",
                    "Use operators (+, -, *, /, %) for calculations",
                    "Press x² to square the current number",
                    "Press = to calculate the result",
                    "Press AC to clear all entries",
                ],
                vec![("Home", Route::Home)],
            ),
            Route::About => (
                "About the Creator",
                vec![
                    "Satyam Patel",
                    "Full-stack developer passionate about creating intuitive and functional web applications.",
                ],
                vec![
                    ("Home", Route::Home),
                    ("Welcome", Route::Welcome),
                    ("Registration", Route::Registration),
                    ("Calculator", Route::Calculator),
                ],
            ),
            Route::Welcome => (
                "Welcome",
                vec![
                    "Explore the calculator and the registration form.",
                    "Both run entirely on this machine; nothing is stored or sent anywhere.",
                ],
                vec![("Get Started", Route::Registration), ("About", Route::About)],
            ),
            Route::NotFound(_) => (
                "Page Not Found",
                vec!["There is no page at this address."],
                vec![("Home", Route::Home)],
            ),
        };

        Page {
            route: self.clone(),
            title,
            body,
            links,
        }
    }
}

impl Page {
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", self.title, self.route.path());
        let _ = writeln!(out, "{}", "=".repeat(self.title.chars().count()));
        for line in &self.body {
            let _ = writeln!(out, "  {}", line);
        }
        if !self.links.is_empty() {
            out.push('\n');
            for (label, route) in &self.links {
                let _ = writeln!(out, "  -> {:<14} {}", label, route.path());
            }
        }
        out
    }
}

use clap::{Args, Parser, Subcommand};
use retire_friend_core::{Locale, PlanInput, SocialNetwork, Theme};

#[derive(Parser, Debug)]
#[command(name = "retire-friend")]
#[command(about = "Check whether your savings cover your retirement")]
pub struct Cli {
    /// Display language (th or en); overrides RF_LOCALE
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Card theme by class or name; overrides RF_THEME
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project a plan and print its result card and share link
    Project {
        #[command(flatten)]
        plan: PlanArgs,
        /// Print the projection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open a shared link and print its result card
    Open {
        /// Shared link URL
        link: String,
        /// Print the projection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the social network share URL for a plan
    Share {
        #[command(flatten)]
        plan: PlanArgs,
        /// facebook or line
        #[arg(long)]
        network: SocialNetwork,
    },
    /// List available card themes
    Themes,
}

/// Plan fields. Unset fields take the locale's starter values.
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Avatar image path or URL
    #[arg(long)]
    pub avatar: Option<String>,
    #[arg(long)]
    pub start_age: Option<u32>,
    #[arg(long)]
    pub salary: Option<i64>,
    #[arg(long)]
    pub monthly_savings: Option<i64>,
    #[arg(long)]
    pub retire_age: Option<u32>,
    #[arg(long)]
    pub monthly_expense: Option<i64>,
    #[arg(long)]
    pub life_expectancy: Option<u32>,
}

impl PlanArgs {
    pub fn into_plan(self, locale: Locale) -> PlanInput {
        let starter = PlanInput::starter(locale);
        PlanInput {
            display_name: self.name.unwrap_or(starter.display_name),
            avatar_ref: self.avatar.unwrap_or(starter.avatar_ref),
            start_age: self.start_age.unwrap_or(starter.start_age),
            monthly_salary: self.salary.unwrap_or(starter.monthly_salary),
            monthly_savings: self.monthly_savings.unwrap_or(starter.monthly_savings),
            retire_age: self.retire_age.unwrap_or(starter.retire_age),
            monthly_expense: self.monthly_expense.unwrap_or(starter.monthly_expense),
            life_expectancy: self.life_expectancy.unwrap_or(starter.life_expectancy),
        }
    }
}

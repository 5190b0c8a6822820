//! Command definitions and handlers for the cadence CLI.
//!
//! Each command has a clap argument struct converted into the matching core
//! parameter type with `From`, so clap attributes never leak into
//! `cadence_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! [`Cli`] then runs the command against the [`Planner`] and hands the
//! markdown produced by the core display types to the renderer.
//!
//! The CLI stands in for the authentication layer: `--user <EMAIL>` names the
//! acting identity, and commands that change templates or delete another
//! user's plan require that identity to hold the `ADMIN` role.

use anyhow::{Context, Result, bail};
use cadence_core::{
    CreateResult, DeleteResult, OperationStatus, Planner, Role, UpdateResult, User, params::*,
};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// User commands
// ============================================================================

/// Role granted to a new user
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Authors templates and may remove any plan
    Admin,
    /// Regular member who follows plans
    User,
}

impl From<RoleArg> for Role {
    fn from(val: RoleArg) -> Self {
        match val {
            RoleArg::Admin => Role::Admin,
            RoleArg::User => Role::User,
        }
    }
}

/// Register a new user
#[derive(Args)]
pub struct CreateUserArgs {
    /// Unique email address of the user
    pub email: String,
    /// Roles to grant as a comma-separated list (defaults to user)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub roles: Vec<RoleArg>,
}

impl From<CreateUserArgs> for CreateUser {
    fn from(val: CreateUserArgs) -> Self {
        CreateUser {
            email: val.email,
            roles: val.roles.into_iter().map(Role::from).collect(),
        }
    }
}

/// Show a registered user
#[derive(Args)]
pub struct ShowUserArgs {
    /// Email of the user to show
    pub email: String,
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    #[command(alias = "c")]
    Create(CreateUserArgs),
    /// Show a registered user
    #[command(alias = "s")]
    Show(ShowUserArgs),
}

// ============================================================================
// Template commands
// ============================================================================

/// Create a new, empty template
#[derive(Args)]
pub struct CreateTemplateArgs {
    /// Name of the template
    pub name: String,
    /// Minimum lead time in days between plan creation and deadline
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub prep_time: i64,
    /// Description of the ideal prerequisites
    #[arg(long)]
    pub pre_req: Option<String>,
    /// Nominal duration of the whole programme
    #[arg(short, long, allow_negative_numbers = true)]
    pub duration: Option<i64>,
}

impl From<CreateTemplateArgs> for CreateTemplate {
    fn from(val: CreateTemplateArgs) -> Self {
        CreateTemplate {
            name: val.name,
            prep_time: val.prep_time,
            ideal_pre_req: val.pre_req,
            duration: val.duration,
        }
    }
}

/// Update the details of a template
#[derive(Args)]
pub struct UpdateTemplateArgs {
    /// ID of the template to update
    pub id: String,
    /// New name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New lead time in days
    #[arg(short, long, allow_negative_numbers = true)]
    pub prep_time: Option<i64>,
    /// New description of the ideal prerequisites
    #[arg(long)]
    pub pre_req: Option<String>,
    /// New nominal duration
    #[arg(short, long, allow_negative_numbers = true)]
    pub duration: Option<i64>,
}

impl From<UpdateTemplateArgs> for UpdateTemplate {
    fn from(val: UpdateTemplateArgs) -> Self {
        UpdateTemplate {
            id: val.id,
            name: val.name,
            prep_time: val.prep_time,
            ideal_pre_req: val.pre_req,
            duration: val.duration,
        }
    }
}

/// List templates
#[derive(Args)]
pub struct ListTemplatesArgs {
    /// Number of templates to skip
    #[arg(long)]
    pub offset: Option<usize>,
    /// Maximum number of templates to show (default 9)
    #[arg(long)]
    pub limit: Option<usize>,
}

impl From<ListTemplatesArgs> for ListTemplates {
    fn from(val: ListTemplatesArgs) -> Self {
        ListTemplates {
            offset: val.offset,
            limit: val.limit,
        }
    }
}

/// Identifies a template, task or plan by ID
#[derive(Args)]
pub struct IdArgs {
    /// Unique identifier of the resource
    pub id: String,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Create a new, empty template
    #[command(alias = "c")]
    Create(CreateTemplateArgs),
    /// Update the details of a template
    #[command(alias = "u")]
    Update(UpdateTemplateArgs),
    /// List templates
    #[command(aliases = ["l", "ls"])]
    List(ListTemplatesArgs),
    /// Show a template with its tasks
    #[command(alias = "s")]
    Show(IdArgs),
    /// Delete a template with its tasks and every plan generated from it
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}

// ============================================================================
// Task commands
// ============================================================================

/// Add a task to a template
#[derive(Args)]
pub struct CreateTaskArgs {
    /// ID of the template to add the task to
    pub template_id: String,
    /// Title of the task
    pub title: String,
    /// Expected duration in minutes
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub duration: i64,
    /// Detailed description of the task
    #[arg(short, long)]
    pub description: Option<String>,
    /// Media references (video URLs, file names) as comma-separated list
    #[arg(short, long, value_delimiter = ',')]
    pub media: Vec<String>,
}

impl From<CreateTaskArgs> for CreateTask {
    fn from(val: CreateTaskArgs) -> Self {
        CreateTask {
            template_id: val.template_id,
            title: val.title,
            duration: val.duration,
            description: val.description,
            media: val.media,
        }
    }
}

/// Update the details of a task
#[derive(Args)]
pub struct UpdateTaskArgs {
    /// ID of the task to update
    pub id: String,
    /// New title
    #[arg(short, long)]
    pub title: Option<String>,
    /// New duration in minutes
    #[arg(long, allow_negative_numbers = true)]
    pub duration: Option<i64>,
    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Replacement media references as comma-separated list
    #[arg(short, long, value_delimiter = ',')]
    pub media: Option<Vec<String>>,
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            title: val.title,
            duration: val.duration,
            description: val.description,
            media: val.media,
        }
    }
}

/// Identifies a task inside one of the acting user's plans
#[derive(Args)]
pub struct PlanTaskArgs {
    /// ID of the plan
    pub plan_id: String,
    /// ID of the task
    pub task_id: String,
}

impl From<PlanTaskArgs> for PlanTaskRef {
    fn from(val: PlanTaskArgs) -> Self {
        PlanTaskRef {
            plan_id: val.plan_id,
            task_id: val.task_id,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to a template
    #[command(alias = "c")]
    Create(CreateTaskArgs),
    /// Update the details of a task
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Delete a task from its template and from every plan
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// Mark a task of one of your plans as completed
    #[command(alias = "done")]
    Complete(PlanTaskArgs),
    /// Show a task as scheduled in one of your plans
    #[command(alias = "s")]
    Show(PlanTaskArgs),
    /// Unschedule a task from one of your plans only
    #[command(alias = "r")]
    Remove(PlanTaskArgs),
}

// ============================================================================
// Plan commands
// ============================================================================

/// Generate a plan from a template
#[derive(Args)]
pub struct CreatePlanArgs {
    /// ID of the template to follow
    pub template_id: String,
    /// Deadline as a date (2025-06-01) or timestamp, read as UTC
    pub deadline: String,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            template_id: val.template_id,
            deadline: val.deadline,
        }
    }
}

/// List your plans by ascending deadline
#[derive(Args)]
pub struct ListPlansArgs {
    /// Show completed plans instead of plans in progress
    #[arg(long)]
    pub completed: bool,
    /// Number of plans to skip
    #[arg(long)]
    pub offset: Option<usize>,
    /// Maximum number of plans to show (default 5)
    #[arg(long)]
    pub limit: Option<usize>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            completed: val.completed,
            offset: val.offset,
            limit: val.limit,
        }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    pub id: String,
    /// Delete the plan whoever owns it (admin only)
    #[arg(long)]
    pub admin: bool,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a plan from a template
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Show one of your plans week by week
    #[command(alias = "s")]
    Show(IdArgs),
    /// List your plans by ascending deadline
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs parsed commands against a planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    acting_email: Option<String>,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, acting_email: Option<String>) -> Self {
        Self {
            planner,
            renderer,
            acting_email,
        }
    }

    /// Resolves `--user` into a registered user.
    async fn acting_user(&self) -> Result<User> {
        let Some(email) = self.acting_email.as_deref() else {
            bail!("This command needs the acting user, pass --user <EMAIL>");
        };
        let user = self.planner.authenticate(email).await?;
        debug!("acting as {} ({})", user.email, user.id);
        Ok(user)
    }

    /// Resolves `--user` and checks it holds the admin role.
    async fn acting_admin(&self) -> Result<User> {
        let user = self.acting_user().await?;
        if !user.has_role(Role::Admin) {
            bail!("User '{}' lacks the ADMIN role required for this command", user.email);
        }
        Ok(user)
    }

    pub async fn handle_user_command(&self, command: UserCommands) -> Result<()> {
        match command {
            UserCommands::Create(args) => {
                let user = self
                    .planner
                    .create_user(&args.into())
                    .await
                    .context("Failed to register user")?;
                self.renderer.render(&CreateResult::new(user).to_string())
            }
            UserCommands::Show(args) => {
                let Some(user) = self.planner.find_user_by_email(&args.email).await? else {
                    bail!("No user registered with email '{}'", args.email);
                };
                self.renderer.render(&user.to_string())
            }
        }
    }

    pub async fn handle_template_command(&self, command: TemplateCommands) -> Result<()> {
        match command {
            TemplateCommands::Create(args) => {
                self.acting_admin().await?;
                let template = self
                    .planner
                    .create_template(&args.into())
                    .await
                    .context("Failed to create template")?;
                self.renderer
                    .render(&CreateResult::new(template).to_string())
            }
            TemplateCommands::Update(args) => {
                self.acting_admin().await?;
                let template = self
                    .planner
                    .update_template(&args.into())
                    .await
                    .context("Failed to update template")?;
                self.renderer
                    .render(&UpdateResult::new(template).to_string())
            }
            TemplateCommands::List(args) => {
                let viewer = self.acting_user().await?;
                let summaries = self
                    .planner
                    .list_templates(&args.into(), &viewer)
                    .await
                    .context("Failed to list templates")?;
                self.renderer.render(&summaries.to_string())
            }
            TemplateCommands::Show(args) => {
                let template = self
                    .planner
                    .get_template(&args.into())
                    .await
                    .context("Failed to get template")?;
                self.renderer.render(&template.to_string())
            }
            TemplateCommands::Delete(args) => {
                self.acting_admin().await?;
                let template = self
                    .planner
                    .delete_template(&args.into())
                    .await
                    .context("Failed to delete template")?;
                self.renderer
                    .render(&DeleteResult::new(template).to_string())
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Create(args) => {
                self.acting_admin().await?;
                let task = self
                    .planner
                    .create_task(&args.into())
                    .await
                    .context("Failed to create task")?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::Update(args) => {
                self.acting_admin().await?;
                let task = self
                    .planner
                    .update_task(&args.into())
                    .await
                    .context("Failed to update task")?;
                self.renderer.render(&UpdateResult::new(task).to_string())
            }
            TaskCommands::Delete(args) => {
                self.acting_admin().await?;
                let task = self
                    .planner
                    .delete_task(&args.into())
                    .await
                    .context("Failed to delete task")?;
                self.renderer.render(&DeleteResult::new(task).to_string())
            }
            TaskCommands::Complete(args) => {
                let user = self.acting_user().await?;
                let status = self
                    .planner
                    .complete_task(&args.into(), &user)
                    .await
                    .context("Failed to complete task")?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Task {} marked as completed in plan {}",
                        status.task_id, status.plan_id
                    ))
                    .to_string(),
                )
            }
            TaskCommands::Show(args) => {
                let user = self.acting_user().await?;
                let task = self
                    .planner
                    .get_plan_task(&args.into(), &user)
                    .await
                    .context("Failed to get task")?;
                self.renderer.render(&task.to_string())
            }
            TaskCommands::Remove(args) => {
                let user = self.acting_user().await?;
                let task_ref: PlanTaskRef = args.into();
                self.planner
                    .remove_task_from_plan(&task_ref, &user)
                    .await
                    .context("Failed to remove task from plan")?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Task {} removed from plan {}",
                        task_ref.task_id, task_ref.plan_id
                    ))
                    .to_string(),
                )
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let user = self.acting_user().await?;
                let view = self
                    .planner
                    .create_plan(&args.into(), &user)
                    .await
                    .context("Failed to create plan")?;
                self.renderer.render(&CreateResult::new(view).to_string())
            }
            PlanCommands::Show(args) => {
                let user = self.acting_user().await?;
                let view = self
                    .planner
                    .get_plan_view(&args.into(), &user)
                    .await
                    .context("Failed to get plan")?;
                self.renderer.render(&view.to_string())
            }
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Delete(args) => {
                let id = Id { id: args.id };
                if args.admin {
                    self.acting_admin().await?;
                    self.planner
                        .delete_plan_admin(&id)
                        .await
                        .context("Failed to delete plan")?;
                } else {
                    let user = self.acting_user().await?;
                    self.planner
                        .delete_plan(&id, &user)
                        .await
                        .context("Failed to delete plan")?;
                }
                self.renderer.render(
                    &OperationStatus::success(format!("Deleted plan {}", id.id)).to_string(),
                )
            }
        }
    }

    /// Lists the acting user's plans of one completion class.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let user = self.acting_user().await?;
        let plans = self
            .planner
            .list_plans(params, &user)
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&plans.to_string())
    }
}

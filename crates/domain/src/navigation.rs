use std::str::FromStr;

use planora_core::AppError;
use serde::{Deserialize, Serialize};

use crate::Resource;

/// Pages exposed by the application navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Landing dashboard.
    Dashboard,
    /// Performance charts.
    Performance,
    /// Department list.
    Departments,
    /// Member directory.
    Members,
    /// Active project list.
    Projects,
    /// Single project view.
    ProjectDetails,
    /// Tasks assigned to the current member.
    MyTasks,
    /// Archived projects.
    ClosedProjects,
    /// Meeting minutes list.
    MeetingMinutes,
    /// Workspace settings.
    Settings,
}

impl Page {
    /// Returns the stable page identifier used by the frontend router.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Performance => "performance",
            Self::Departments => "departments",
            Self::Members => "members",
            Self::Projects => "projects",
            Self::ProjectDetails => "project-details",
            Self::MyTasks => "my-tasks",
            Self::ClosedProjects => "closed-projects",
            Self::MeetingMinutes => "meeting-minutes",
            Self::Settings => "settings",
        }
    }

    /// Returns all navigation pages in menu order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Page] = &[
            Page::Dashboard,
            Page::Performance,
            Page::Departments,
            Page::Members,
            Page::Projects,
            Page::ProjectDetails,
            Page::MyTasks,
            Page::ClosedProjects,
            Page::MeetingMinutes,
            Page::Settings,
        ];

        ALL
    }

    /// Returns the resource whose `view` permission gates this page.
    #[must_use]
    pub fn resource(&self) -> Resource {
        match self {
            Self::Dashboard => Resource::Dashboard,
            Self::Performance => Resource::Performance,
            Self::Departments => Resource::Departments,
            Self::Members => Resource::Members,
            Self::Projects | Self::ProjectDetails => Resource::Projects,
            Self::MyTasks => Resource::Tasks,
            Self::ClosedProjects => Resource::ClosedProjects,
            Self::MeetingMinutes => Resource::MeetingMinutes,
            Self::Settings => Resource::AdminSettings,
        }
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|page| page.as_str() == value)
            .ok_or_else(|| AppError::NotFound(format!("unknown page '{value}'")))
    }
}

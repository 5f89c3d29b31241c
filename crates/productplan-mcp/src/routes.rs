//! Tool route table
//!
//! Each tool is one [`ToolRoute`]: an HTTP verb, a path template with
//! `{param}` placeholders and a rule for building the request body. The
//! catalog returned by `tools/list` and the dispatcher are both driven by
//! [`TOOL_ROUTES`], so a tool cannot be listed without being callable.

use std::fmt;

use productplan_api::Method;

/// HTTP verbs used by ProductPlan tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
}

impl Verb {
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Patch => Method::PATCH,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Patch => "PATCH",
        })
    }
}

/// A single string parameter in a tool's input schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

const fn required(name: &'static str, description: &'static str) -> Param {
    Param {
        name,
        description,
        required: true,
    }
}

const fn optional(name: &'static str, description: &'static str) -> Param {
    Param {
        name,
        description,
        required: false,
    }
}

/// How the outgoing request body is assembled from tool arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRule {
    /// No request body
    None,
    /// Copy each listed field the caller supplied, verbatim
    Provided(&'static [&'static str]),
    /// Copy each listed field only when its value is truthy (partial update)
    Truthy(&'static [&'static str]),
}

/// Descriptor tying a tool name to its ProductPlan endpoint
#[derive(Debug, Clone, Copy)]
pub struct ToolRoute {
    pub name: &'static str,
    pub description: &'static str,
    pub verb: Verb,
    pub path: &'static str,
    pub params: &'static [Param],
    pub body: BodyRule,
}

const BAR_FIELDS: &[&str] = &["name", "start_date", "end_date", "description"];

/// Every tool the server exposes, grouped by resource family
pub static TOOL_ROUTES: &[ToolRoute] = &[
    // Roadmaps
    ToolRoute {
        name: "list_roadmaps",
        description: "List all roadmaps in your ProductPlan account",
        verb: Verb::Get,
        path: "/roadmaps",
        params: &[],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "get_roadmap",
        description: "Get details of a specific roadmap",
        verb: Verb::Get,
        path: "/roadmaps/{id}",
        params: &[required("id", "Roadmap ID")],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "get_roadmap_bars",
        description: "Get all bars (items) from a roadmap",
        verb: Verb::Get,
        path: "/roadmaps/{roadmap_id}/bars",
        params: &[required("roadmap_id", "Roadmap ID")],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "get_roadmap_lanes",
        description: "Get all lanes from a roadmap",
        verb: Verb::Get,
        path: "/roadmaps/{roadmap_id}/lanes",
        params: &[required("roadmap_id", "Roadmap ID")],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "get_roadmap_milestones",
        description: "Get all milestones from a roadmap",
        verb: Verb::Get,
        path: "/roadmaps/{roadmap_id}/milestones",
        params: &[required("roadmap_id", "Roadmap ID")],
        body: BodyRule::None,
    },
    // Bars
    ToolRoute {
        name: "get_bar",
        description: "Get details of a specific bar",
        verb: Verb::Get,
        path: "/bars/{id}",
        params: &[required("id", "Bar ID")],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "create_bar",
        description: "Create a new bar on a roadmap",
        verb: Verb::Post,
        path: "/bars",
        params: &[
            required("roadmap_id", "Roadmap ID"),
            required("lane_id", "Lane ID"),
            required("name", "Bar name"),
            optional("start_date", "Start date (YYYY-MM-DD)"),
            optional("end_date", "End date (YYYY-MM-DD)"),
            optional("description", "Bar description"),
        ],
        body: BodyRule::Provided(&[
            "roadmap_id",
            "lane_id",
            "name",
            "start_date",
            "end_date",
            "description",
        ]),
    },
    ToolRoute {
        name: "update_bar",
        description: "Update an existing bar",
        verb: Verb::Patch,
        path: "/bars/{id}",
        params: &[
            required("id", "Bar ID"),
            optional("name", "Bar name"),
            optional("start_date", "Start date (YYYY-MM-DD)"),
            optional("end_date", "End date (YYYY-MM-DD)"),
            optional("description", "Bar description"),
        ],
        body: BodyRule::Truthy(BAR_FIELDS),
    },
    // Discovery
    ToolRoute {
        name: "list_ideas",
        description: "List all ideas in Discovery",
        verb: Verb::Get,
        path: "/discovery/ideas",
        params: &[],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "get_idea",
        description: "Get details of a specific idea",
        verb: Verb::Get,
        path: "/discovery/ideas/{id}",
        params: &[required("id", "Idea ID")],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "create_idea",
        description: "Create a new idea",
        verb: Verb::Post,
        path: "/discovery/ideas",
        params: &[
            required("title", "Idea title"),
            optional("description", "Idea description"),
        ],
        body: BodyRule::Provided(&["title", "description"]),
    },
    ToolRoute {
        name: "list_opportunities",
        description: "List all opportunities in Discovery",
        verb: Verb::Get,
        path: "/discovery/opportunities",
        params: &[],
        body: BodyRule::None,
    },
    // Strategy
    ToolRoute {
        name: "list_objectives",
        description: "List all strategic objectives",
        verb: Verb::Get,
        path: "/strategy/objectives",
        params: &[],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "get_objective",
        description: "Get details of a specific objective",
        verb: Verb::Get,
        path: "/strategy/objectives/{id}",
        params: &[required("id", "Objective ID")],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "list_key_results",
        description: "List key results for an objective",
        verb: Verb::Get,
        path: "/strategy/objectives/{objective_id}/key-results",
        params: &[required("objective_id", "Objective ID")],
        body: BodyRule::None,
    },
    // Launches
    ToolRoute {
        name: "list_launches",
        description: "List all launches",
        verb: Verb::Get,
        path: "/launches",
        params: &[],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "get_launch",
        description: "Get details of a specific launch",
        verb: Verb::Get,
        path: "/launches/{id}",
        params: &[required("id", "Launch ID")],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "list_launch_tasks",
        description: "List tasks for a launch",
        verb: Verb::Get,
        path: "/launches/{launch_id}/tasks",
        params: &[required("launch_id", "Launch ID")],
        body: BodyRule::None,
    },
    // Account utilities
    ToolRoute {
        name: "list_users",
        description: "List all users in the account",
        verb: Verb::Get,
        path: "/users",
        params: &[],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "list_teams",
        description: "List all teams in the account",
        verb: Verb::Get,
        path: "/teams",
        params: &[],
        body: BodyRule::None,
    },
    ToolRoute {
        name: "check_status",
        description: "Check ProductPlan API status",
        verb: Verb::Get,
        path: "/status",
        params: &[],
        body: BodyRule::None,
    },
];

/// Look up a route by tool name
pub fn find_route(name: &str) -> Option<&'static ToolRoute> {
    TOOL_ROUTES.iter().find(|route| route.name == name)
}

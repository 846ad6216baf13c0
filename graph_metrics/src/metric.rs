/// The metrics, one per tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Clustering,
    Community,
    Connectedness,
    Density,
    Eigenvalue,
    Triads,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Clustering,
        Metric::Community,
        Metric::Connectedness,
        Metric::Density,
        Metric::Eigenvalue,
        Metric::Triads,
    ];
    pub const SELECTORS: [&'static str; 6] = [
        "clustering",
        "community",
        "connectedness",
        "density",
        "eigenvalue",
        "triads",
    ];
    /// Name accepted on the command line.
    pub fn selector(self) -> &'static str {
        match self {
            Metric::Clustering => "clustering",
            Metric::Community => "community",
            Metric::Connectedness => "connectedness",
            Metric::Density => "density",
            Metric::Eigenvalue => "eigenvalue",
            Metric::Triads => "triads",
        }
    }
    /// Prefix of the result file, `<output_name>_<id>.txt`.
    pub fn output_name(self) -> &'static str {
        match self {
            Metric::Triads => "triangles",
            _ => self.selector(),
        }
    }
    pub fn description(self) -> &'static str {
        match self {
            Metric::Clustering => "Global clustering coefficient of an undirected graph.",
            Metric::Community => "Best modularity of a greedy (CNM) community partition.",
            Metric::Connectedness => {
                "Number of strongly connected components divided by the squared node count."
            }
            Metric::Density => "Number of edges divided by the squared node count.",
            Metric::Eigenvalue => "Largest eigenvalue of the adjacency matrix.",
            Metric::Triads => "Number of closed triads (triangles).",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.selector())
    }
}

impl std::str::FromStr for Metric {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.selector() == s)
            .ok_or_else(|| format!("unknown metric {:?}, expected one of {}", s, Metric::SELECTORS.join(", ")))
    }
}

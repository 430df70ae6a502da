//! Step definitions for board completion BDD scenarios.


mod given;

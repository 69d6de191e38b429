//! Trimmed copy of a real metadata document

pub(crate) const METADATA_JSON: &str = r#"{
    "_links": {},
    "dependencies": {
        "type": "hierarchical-multi-select",
        "values": [
            {
                "name": "Developer Tools",
                "values": [
                    {
                        "id": "native",
                        "name": "GraalVM Native Support",
                        "description": "Support for compiling Spring applications to native executables.",
                        "versionRange": "[3.2.0,3.5.0-M1)"
                    },
                    { "id": "lombok", "name": "Lombok" }
                ]
            },
            {
                "name": "Web",
                "values": [
                    { "id": "web", "name": "Spring Web" },
                    { "id": "legacy-web", "name": "Legacy Web", "versionRange": "(,3.0.0)" },
                    { "id": "broken", "name": "Broken Range", "versionRange": "[3.2.0" }
                ]
            }
        ]
    },
    "type": {
        "type": "action",
        "default": "maven-project",
        "values": [
            {
                "id": "maven-project",
                "name": "Maven",
                "action": "/starter.zip",
                "tags": { "build": "maven", "format": "project" }
            },
            {
                "id": "maven-build",
                "name": "Maven POM",
                "action": "/pom.xml",
                "tags": { "build": "maven", "format": "build" }
            },
            {
                "id": "gradle-project-kotlin",
                "name": "Gradle - Kotlin",
                "action": "/starter.zip",
                "tags": { "build": "gradle", "dialect": "kotlin", "format": "project" }
            }
        ]
    },
    "packaging": { "type": "single-select", "default": "jar", "values": [ { "id": "jar", "name": "Jar" }, { "id": "war", "name": "War" } ] },
    "javaVersion": { "type": "single-select", "default": "17", "values": [ { "id": "21", "name": "21" }, { "id": "17", "name": "17" } ] },
    "language": { "type": "single-select", "default": "java", "values": [ { "id": "java", "name": "Java" }, { "id": "kotlin", "name": "Kotlin" } ] },
    "bootVersion": {
        "type": "single-select",
        "default": "3.3.1",
        "values": [
            { "id": "3.4.0-SNAPSHOT", "name": "3.4.0 (SNAPSHOT)" },
            { "id": "3.3.1", "name": "3.3.1" },
            { "id": "2.7.18", "name": "2.7.18" }
        ]
    },
    "groupId": { "type": "text", "default": "com.example" },
    "artifactId": { "type": "text", "default": "demo" },
    "version": { "type": "text", "default": "0.0.1-SNAPSHOT" },
    "name": { "type": "text", "default": "demo" },
    "description": { "type": "text", "default": "Demo project for Spring Boot" },
    "packageName": { "type": "text", "default": "com.example.demo" }
}"#;

mod path;
mod walker;

pub use path::NodePath;
pub use walker::{walk, ArtifactSite, DescriptorVisitor};

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::{json, Value};

    /// Two-library descriptor in the shape of the LWJGL3 meta component.
    pub(crate) fn sample_descriptor() -> Value {
        json!({
            "formatVersion": 1,
            "name": "LWJGL 3",
            "type": "release",
            "uid": "org.lwjgl3",
            "version": "3.3.3",
            "libraries": [
                {
                    "name": "org.lwjgl:lwjgl:3.3.3",
                    "downloads": {
                        "artifact": {
                            "sha1": "29589b5f87ed335a6c7e7ee6a5775f81f97ecb84",
                            "size": 785029,
                            "url": "https://libraries.minecraft.net/org/lwjgl/lwjgl/3.3.3/lwjgl-3.3.3.jar"
                        },
                        "classifiers": {
                            "natives-linux": {
                                "sha1": "1713758e3660ba66e1e954396fd18126038b33c0",
                                "size": 114627,
                                "url": "https://libraries.minecraft.net/org/lwjgl/lwjgl/3.3.3/lwjgl-3.3.3-natives-linux.jar"
                            },
                            "natives-windows": {
                                "sha1": "a5ed18a2b82fc91b81f40d717cb1f64c9dcb0540",
                                "size": 165442,
                                "url": "https://libraries.minecraft.net/org/lwjgl/lwjgl/3.3.3/lwjgl-3.3.3-natives-windows.jar"
                            },
                            "natives-osx": {
                                "sha1": "33a7c2a5de2a4a3f4bd3a5b7cb40e0f0a3d4b0f5",
                                "size": 128512,
                                "url": "https://libraries.minecraft.net/org/lwjgl/lwjgl/3.3.3/lwjgl-3.3.3-natives-macos.jar"
                            }
                        }
                    },
                    "natives": {
                        "linux": "natives-linux",
                        "windows": "natives-windows",
                        "osx": "natives-osx"
                    }
                },
                {
                    "name": "org.lwjgl:lwjgl-glfw:3.3.3",
                    "downloads": {
                        "artifact": {
                            "sha1": "efa1eb78c5ccd840e9f329717109b5e892d72f8e",
                            "size": 128801,
                            "url": "https://libraries.minecraft.net/org/lwjgl/lwjgl-glfw/3.3.3/lwjgl-glfw-3.3.3.jar"
                        }
                    }
                }
            ]
        })
    }
}

//! Browser test page for the echo endpoint.

/// HTML/JS test page. `__WS_URL__` is replaced with the WebSocket URL
/// computed from the incoming request before the page is served.
const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Hibiki echo test</title>
<script>
window.addEventListener("load", function () {
    var output = document.getElementById("output");
    var input = document.getElementById("input");
    var ws = null;

    function print(message) {
        var line = document.createElement("div");
        line.textContent = message;
        output.appendChild(line);
    }

    document.getElementById("open").onclick = function () {
        if (ws) {
            return false;
        }
        ws = new WebSocket("__WS_URL__");
        ws.onopen = function () {
            print("OPEN");
        };
        ws.onclose = function () {
            print("CLOSE");
            ws = null;
        };
        ws.onmessage = function (event) {
            print("RESPONSE: " + event.data);
        };
        ws.onerror = function (event) {
            print("ERROR: " + event.data);
        };
        return false;
    };

    document.getElementById("send").onclick = function () {
        if (!ws) {
            return false;
        }
        print("SEND: " + input.value);
        ws.send(input.value);
        return false;
    };

    document.getElementById("close").onclick = function () {
        if (!ws) {
            return false;
        }
        ws.close();
        return false;
    };
});
</script>
</head>
<body>
<p>
Click "Open" to connect to the echo server, "Send" to send the message in
the text box, and "Close" to close the connection. The server's responses
appear below.
</p>
<form>
<button id="open">Open</button>
<button id="close">Close</button>
<p><input id="input" type="text" value="Hello world!">
<button id="send">Send</button>
</form>
<div id="output"></div>
</body>
</html>
"#;

/// Render the test page against the given WebSocket URL.
pub fn render(ws_url: &str) -> String {
    HOME_PAGE.replace("__WS_URL__", ws_url)
}
